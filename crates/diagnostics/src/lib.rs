//! Diagnostics for the PCL metadata decoder.
//!
//! Provides [`Diagnostic`], [`Severity`] and [`Span`] types used to report
//! unexpected bytes, unknown commands and truncated input found while
//! scanning a printer stream. Diagnostic codes are defined in the [`codes`]
//! module.

#![warn(missing_docs)]

/// Diagnostic ID constants.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Hard error: decoding stopped at this point.
    Error,
    /// Warning: the offending bytes were skipped and decoding continued.
    Warn,
    /// Informational note.
    Info,
}

/// Byte span in the input stream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte (0-based).
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "Span end ({end}) < start ({start})");
        Self { start, end }
    }

    /// Number of bytes covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A diagnostic message produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"PCL1001"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable diagnostic message.
    pub message: String,
    /// Optional byte span in the input that this diagnostic relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Machine-readable context for tooling. Keys and values are free-form strings.
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Error, message, span)
    }

    /// Shorthand for a `Warn` diagnostic.
    pub fn warn(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Warn, message, span)
    }

    /// Attach machine-readable context metadata (builder pattern).
    ///
    /// Keys are short descriptors like `"group"`, `"terminator"`, `"byte"`.
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Whether this diagnostic has `Error` severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns the human-readable explanation for this diagnostic's code, if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        codes::UNEXPECTED_BYTE => Some(
            "A byte outside any escape sequence was neither the escape marker nor a \
             form-feed/line-feed. The byte is skipped and scanning continues.",
        ),
        codes::INVALID_COMMAND_BYTE => Some(
            "The byte following the escape marker is outside the command-category \
             range (33-126). The escape sequence is abandoned.",
        ),
        codes::UNKNOWN_COMMAND => Some(
            "The escape marker is followed by a two-byte command character that has \
             no registered meaning. The sequence is abandoned.",
        ),
        codes::UNKNOWN_GROUP => Some(
            "The two bytes after the escape marker do not name a known parameterized \
             command group. The sequence is abandoned and scanning resumes at the next byte.",
        ),
        codes::INCOMPLETE_GROUP => Some(
            "The stream ended after the first byte of a parameterized command group.",
        ),
        codes::UNKNOWN_TERMINATOR => Some(
            "The letter ending a numeric parameter is not a known field for its \
             command group. The parameter is reported as Unknown and decoding continues.",
        ),
        codes::TRUNCATED_NUMBER => Some(
            "The stream ended in the middle of a numeric parameter, before its \
             terminating letter. No further bytes remain, so scanning stops.",
        ),
        codes::TRUNCATED_PAYLOAD => Some(
            "A raster data command declared more payload bytes than the stream \
             contains. Scanning stops.",
        ),
        codes::INVALID_PAYLOAD_LENGTH => Some(
            "A raster data command's length is not a non-negative integer, so the \
             payload cannot be skipped safely. Scanning stops.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Span ────────────────────────────────────────────────────────────

    #[test]
    fn span_new_valid() {
        let s = Span::new(5, 10);
        assert_eq!(s.start, 5);
        assert_eq!(s.end, 10);
        assert_eq!(s.len(), 5);
    }

    #[test]
    #[should_panic(expected = "Span end (3) < start (5)")]
    fn span_new_inverted_panics() {
        Span::new(5, 3);
    }

    // ── Severity Display ────────────────────────────────────────────────

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warn), "warn");
        assert_eq!(format!("{}", Severity::Info), "info");
    }

    // ── Diagnostic constructors ─────────────────────────────────────────

    #[test]
    fn diagnostic_error_constructor() {
        let d = Diagnostic::error(codes::TRUNCATED_NUMBER, "stream ended", None);
        assert_eq!(d.id, "PCL2001");
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.message, "stream ended");
        assert!(d.span.is_none());
        assert!(d.is_error());
    }

    #[test]
    fn diagnostic_warn_constructor() {
        let d = Diagnostic::warn(codes::UNEXPECTED_BYTE, "stray", Some(Span::new(0, 1)));
        assert_eq!(d.severity, Severity::Warn);
        assert_eq!(d.span, Some(Span::new(0, 1)));
        assert!(!d.is_error());
    }

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::warn(codes::UNKNOWN_GROUP, "unknown command group &q", None);
        assert_eq!(format!("{}", d), "warn[PCL1004]: unknown command group &q");
    }

    // ── explain ─────────────────────────────────────────────────────────

    #[test]
    fn all_codes_have_explanations() {
        for code in codes::ALL {
            assert!(
                explain(code).is_some(),
                "diagnostic code {code} has no explain() entry"
            );
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in codes::ALL {
            assert!(seen.insert(*code), "duplicate diagnostic code {code}");
        }
    }

    #[test]
    fn diagnostic_explain_unknown() {
        let d = Diagnostic::error("UNKNOWN_CODE", "test", None);
        assert!(d.explain().is_none());
    }

    // ── Serde ───────────────────────────────────────────────────────────

    #[test]
    fn diagnostic_serde_omits_none_span() {
        let d = Diagnostic::error(codes::TRUNCATED_PAYLOAD, "test", None);
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("span"), "None span should be omitted: {json}");
        assert!(
            !json.contains("context"),
            "None context should be omitted: {json}"
        );
    }

    #[test]
    fn diagnostic_context_serde_roundtrip() {
        let d = Diagnostic::warn(codes::UNKNOWN_TERMINATOR, "unknown", Some(Span::new(0, 5)))
            .with_context(BTreeMap::from([
                ("group".into(), "&l".into()),
                ("terminator".into(), "Q".into()),
            ]));
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"severity\":\"warn\""), "{json}");
        let d2: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(d, d2);
    }
}
