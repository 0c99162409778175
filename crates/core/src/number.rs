//! Numeric parameter reader.
//!
//! A parameter is an optional leading sign, ASCII digits and at most one
//! decimal point, ended by the first byte that is none of these. That byte,
//! the terminator, names the field being set and is consumed with the value.

use std::fmt;
use std::io::BufRead;

use pcl_meta_diagnostics::Span;
use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::DecodeError;

/// A number exactly as it appeared in the stream.
///
/// Leading zeros, a leading sign and the decimal point are preserved. The
/// token may be empty, and it is only converted when a command needs an
/// actual count (see [`NumericToken::to_length`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NumericToken(String);

impl NumericToken {
    /// The literal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no numeric bytes preceded the terminator.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the token as a byte count.
    ///
    /// Accepts an optional sign and digits only. Negative, fractional and
    /// empty tokens yield `None`; `-0` is zero.
    pub fn to_length(&self) -> Option<usize> {
        let value = self.0.parse::<i64>().ok()?;
        usize::try_from(value).ok()
    }
}

impl fmt::Display for NumericToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NumericToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One numeric value plus the byte that ended it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The literal value.
    pub token: NumericToken,
    /// The terminator byte, as it appeared (case preserved).
    pub terminator: u8,
    /// Value and terminator bytes.
    pub span: Span,
}

impl Parameter {
    /// Terminator folded to uppercase; this is the field selector.
    pub fn field(&self) -> u8 {
        self.terminator.to_ascii_uppercase()
    }

    /// A lowercase terminator means another parameter of the same group follows.
    pub fn is_chained(&self) -> bool {
        self.terminator.is_ascii_lowercase()
    }
}

/// Read one parameter starting at the cursor.
///
/// A sign is only accepted as the first byte of the token; a sign anywhere
/// else terminates it. A second decimal point also terminates it.
///
/// # Errors
///
/// [`DecodeError::TruncatedToken`] when the stream ends before a terminator,
/// [`DecodeError::Io`] when the source fails.
pub fn read_parameter<R: BufRead>(cursor: &mut ByteCursor<R>) -> Result<Parameter, DecodeError> {
    let start = cursor.position();
    let mut text = String::new();
    let mut seen_point = false;

    loop {
        let Some(b) = cursor.next_byte()? else {
            return Err(DecodeError::TruncatedToken {
                token: text,
                span: Span::new(start, cursor.position()),
            });
        };
        match b {
            b'0'..=b'9' => text.push(b as char),
            b'+' | b'-' if text.is_empty() => text.push(b as char),
            b'.' if !seen_point => {
                seen_point = true;
                text.push('.');
            }
            _ => {
                return Ok(Parameter {
                    token: NumericToken(text),
                    terminator: b,
                    span: Span::new(start, cursor.position()),
                });
            }
        }
    }
}
