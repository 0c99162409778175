//! PCL metadata decoder core library.
//!
//! Scans a PCL5 printer stream, decodes the escape sequences embedded in it
//! and describes the job settings they carry: page size, paper source,
//! orientation, margins, raster geometry and compression, cursor position
//! and units. Raster payloads are skipped, not decoded. The main entry
//! points are [`scan_bytes`] and [`Scanner::scan`].

#![warn(missing_docs)]

/// Command dispatch after an escape marker.
pub mod command;
/// Scanner configuration.
pub mod config;
/// Forward-only byte cursor.
pub mod cursor;
/// Typed decode errors.
pub mod error;
/// Parameterized command groups and their fields.
pub mod group;
/// Numeric parameter reader.
pub mod number;
/// Scan output: settings and diagnostics.
pub mod report;
/// Top-level scanning loop.
pub mod scanner;
/// Value tables for coded fields.
pub mod tables;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Scanner
pub use scanner::{Scanner, scan_bytes, scan_reader};

// Output
pub use report::{Record, ScanReport, Setting, to_pretty_json};

// Building blocks
pub use command::{CommandClass, classify};
pub use config::{ESCAPE, ScanConfig};
pub use cursor::ByteCursor;
pub use error::DecodeError;
pub use group::{CommandGroup, Field};
pub use number::{NumericToken, Parameter, read_parameter};

// Diagnostics (re-exported from the diagnostics crate)
pub use pcl_meta_diagnostics::{Diagnostic, Severity, Span, codes};
