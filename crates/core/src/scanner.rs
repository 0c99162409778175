//! Top-level scan loop over a PCL byte stream.

use std::collections::BTreeMap;
use std::io::BufRead;

use log::debug;
use pcl_meta_diagnostics::{Diagnostic, Span, codes};

use crate::command::dispatch;
use crate::config::ScanConfig;
use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::group::describe_byte;
use crate::report::ScanReport;

/// Scan an in-memory stream with the default configuration.
pub fn scan_bytes(input: &[u8]) -> ScanReport {
    Scanner::default()
        .scan(input)
        .expect("reading from a byte slice cannot fail")
}

/// Scan a buffered reader with the default configuration.
///
/// # Errors
///
/// Returns [`DecodeError::Io`] if the reader fails. Problems in the stream
/// itself are reported as diagnostics in the returned report.
pub fn scan_reader<R: BufRead>(reader: R) -> Result<ScanReport, DecodeError> {
    Scanner::default().scan(reader)
}

/// Top-level loop: finds escape sequences and hands them to the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Scanner with a custom configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Decode every escape sequence in `reader`.
    ///
    /// Scanning stops at end of stream, or early (with `halted` set and an
    /// error diagnostic appended) when a numeric parameter or raster block is
    /// truncated or a raster length is unusable.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Io`] if the reader fails.
    pub fn scan<R: BufRead>(&self, reader: R) -> Result<ScanReport, DecodeError> {
        let mut cursor = ByteCursor::new(reader);
        let mut report = ScanReport::default();

        loop {
            let at = cursor.position();
            let Some(b) = cursor.next_byte()? else {
                break;
            };
            if self.config.is_ignored(b) {
                continue;
            }
            if b != self.config.escape {
                report.push_diagnostic(
                    Diagnostic::warn(
                        codes::UNEXPECTED_BYTE,
                        format!("unexpected byte {} outside escape sequence", describe_byte(b)),
                        Some(Span::new(at, at + 1)),
                    )
                    .with_context(BTreeMap::from([("byte".into(), describe_byte(b))])),
                );
                continue;
            }
            let Some(first) = cursor.next_byte()? else {
                break;
            };
            if let Err(e) = dispatch(at, first, &mut cursor, &mut report) {
                match e.to_diagnostic() {
                    Some(diag) => {
                        debug!("scan halted at offset {}: {e}", cursor.position());
                        report.push_diagnostic(diag);
                        report.halted = true;
                        break;
                    }
                    None => return Err(e),
                }
            }
        }

        debug!(
            "scan finished: {} records, {} bytes",
            report.records.len(),
            cursor.position()
        );
        Ok(report)
    }
}
