//! Decoded settings, diagnostics and the ordered scan report.

use std::fmt;

use pcl_meta_diagnostics::{Diagnostic, Span};
use serde::Serialize;

/// One decoded command or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    /// Two-byte group prefix (e.g. `"&l"`); absent for two-byte commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Field or command name.
    pub label: String,
    /// Value description: a table entry, or the literal token when unmapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Source bytes of this setting.
    pub span: Span,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "<{}: {}>", self.label, value),
            None => write!(f, "<{}>", self.label),
        }
    }
}

/// An entry of the scan output, in stream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// A decoded setting.
    Setting(Setting),
    /// A problem found at this point of the stream.
    Diagnostic(Diagnostic),
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Setting(s) => fmt::Display::fmt(s, f),
            Record::Diagnostic(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// Result of scanning a stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Settings and diagnostics, interleaved in the order encountered.
    pub records: Vec<Record>,
    /// Whether scanning stopped early on truncated or undecodable input.
    pub halted: bool,
}

impl ScanReport {
    /// One human-readable line per record.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(Record::to_string)
    }

    /// Decoded settings only.
    pub fn settings(&self) -> impl Iterator<Item = &Setting> {
        self.records.iter().filter_map(|r| match r {
            Record::Setting(s) => Some(s),
            Record::Diagnostic(_) => None,
        })
    }

    /// Diagnostics only.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter().filter_map(|r| match r {
            Record::Diagnostic(d) => Some(d),
            Record::Setting(_) => None,
        })
    }

    /// Whether any error-severity diagnostic was produced.
    pub fn has_errors(&self) -> bool {
        self.diagnostics().any(Diagnostic::is_error)
    }

    pub(crate) fn push_setting(&mut self, setting: Setting) {
        self.records.push(Record::Setting(setting));
    }

    pub(crate) fn push_diagnostic(&mut self, diag: Diagnostic) {
        self.records.push(Record::Diagnostic(diag));
    }
}

/// Serialize a report to a pretty-printed JSON string.
pub fn to_pretty_json(report: &ScanReport) -> String {
    serde_json::to_string_pretty(report).expect("ScanReport serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcl_meta_diagnostics::codes;

    fn setting(label: &str, value: Option<&str>) -> Setting {
        Setting {
            group: Some("&l".into()),
            label: label.into(),
            value: value.map(str::to_string),
            span: Span::new(0, 3),
        }
    }

    #[test]
    fn setting_display() {
        assert_eq!(setting("Top Margin", Some("0")).to_string(), "<Top Margin: 0>");
        assert_eq!(setting("RESET", None).to_string(), "<RESET>");
    }

    #[test]
    fn filters_and_error_flag() {
        let mut r = ScanReport::default();
        r.push_setting(setting("Page Size", Some("A4 (210mm x 297mm)")));
        r.push_diagnostic(Diagnostic::warn(codes::UNEXPECTED_BYTE, "stray", None));
        assert_eq!(r.settings().count(), 1);
        assert_eq!(r.diagnostics().count(), 1);
        assert!(!r.has_errors());
        r.push_diagnostic(Diagnostic::error(codes::TRUNCATED_NUMBER, "cut", None));
        assert!(r.has_errors());
        let lines: Vec<String> = r.lines().collect();
        assert_eq!(lines[0], "<Page Size: A4 (210mm x 297mm)>");
        assert_eq!(lines[1], "warn[PCL1001]: stray");
    }

    #[test]
    fn json_tags_record_kind() {
        let mut r = ScanReport::default();
        r.push_setting(setting("Number of Copies", Some("2")));
        let json: serde_json::Value = serde_json::from_str(&to_pretty_json(&r)).unwrap();
        assert_eq!(json["records"][0]["kind"], "setting");
        assert_eq!(json["records"][0]["group"], "&l");
        assert_eq!(json["records"][0]["value"], "2");
        assert_eq!(json["halted"], false);
    }
}
