//! Typed decode errors.

use std::collections::BTreeMap;
use std::io;

use pcl_meta_diagnostics::{Diagnostic, Span, codes};

/// Conditions that stop decoding.
///
/// Everything except [`DecodeError::Io`] is a property of the input stream
/// and is reported as an error diagnostic by the scanner; `Io` means the
/// byte source itself failed and is returned to the caller.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Reading from the byte source failed.
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    /// The stream ended before a numeric parameter's terminator byte.
    #[error("stream ended inside numeric parameter {token:?}")]
    TruncatedToken {
        /// Literal token accumulated before end of stream.
        token: String,
        /// Bytes of the partial token.
        span: Span,
    },

    /// A raster data block declared more bytes than the stream holds.
    #[error("raster data truncated: expected {expected} bytes, {available} available")]
    TruncatedPayload {
        /// Declared payload length.
        expected: usize,
        /// Bytes actually consumed before end of stream.
        available: usize,
        /// Bytes of the partial payload.
        span: Span,
    },

    /// A raster data block length that is not a non-negative integer.
    #[error("invalid raster data length {token:?}")]
    InvalidPayloadLength {
        /// The literal length token.
        token: String,
        /// Bytes of the parameter that declared the length.
        span: Span,
    },
}

impl DecodeError {
    /// Error diagnostic describing this condition, or `None` for I/O failures.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        let diag = match self {
            DecodeError::Io(_) => return None,
            DecodeError::TruncatedToken { token, span } => {
                Diagnostic::error(codes::TRUNCATED_NUMBER, self.to_string(), Some(*span))
                    .with_context(BTreeMap::from([("value".into(), token.clone())]))
            }
            DecodeError::TruncatedPayload {
                expected,
                available,
                span,
            } => Diagnostic::error(codes::TRUNCATED_PAYLOAD, self.to_string(), Some(*span))
                .with_context(BTreeMap::from([
                    ("expected".into(), expected.to_string()),
                    ("available".into(), available.to_string()),
                ])),
            DecodeError::InvalidPayloadLength { token, span } => Diagnostic::error(
                codes::INVALID_PAYLOAD_LENGTH,
                self.to_string(),
                Some(*span),
            )
            .with_context(BTreeMap::from([("value".into(), token.clone())])),
        };
        Some(diag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_has_no_diagnostic() {
        let e = DecodeError::from(io::Error::other("boom"));
        assert!(e.to_diagnostic().is_none());
        assert_eq!(e.to_string(), "read failed: boom");
    }

    #[test]
    fn truncated_payload_diagnostic_carries_counts() {
        let e = DecodeError::TruncatedPayload {
            expected: 5,
            available: 2,
            span: Span::new(10, 12),
        };
        let d = e.to_diagnostic().unwrap();
        assert_eq!(d.id, codes::TRUNCATED_PAYLOAD);
        assert!(d.is_error());
        let ctx = d.context.unwrap();
        assert_eq!(ctx["expected"], "5");
        assert_eq!(ctx["available"], "2");
    }

    #[test]
    fn invalid_length_diagnostic_keeps_token_and_span() {
        let e = DecodeError::InvalidPayloadLength {
            token: "-1".into(),
            span: Span::new(3, 6),
        };
        let d = e.to_diagnostic().unwrap();
        assert_eq!(d.id, codes::INVALID_PAYLOAD_LENGTH);
        assert_eq!(d.span, Some(Span::new(3, 6)));
        assert_eq!(d.message, "invalid raster data length \"-1\"");
        assert_eq!(d.context.unwrap()["value"], "-1");
    }
}
