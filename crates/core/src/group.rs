//! Parameterized command groups and their field tables.
//!
//! A group is selected by the two bytes after the escape marker (`&l`, `*r`,
//! ...). Each numeric parameter inside the group is named by its terminator
//! letter, matched case-insensitively.

use std::collections::BTreeMap;
use std::io::BufRead;

use log::{debug, trace};
use pcl_meta_diagnostics::{Diagnostic, Span, codes};
use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::number::{NumericToken, Parameter, read_parameter};
use crate::report::{ScanReport, Setting};
use crate::tables::{self, COMPRESSION_METHOD, ORIENTATION, PAGE_SIZE, PAPER_SOURCE};

/// Label used for terminators a group does not define.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A registered parameterized command group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum CommandGroup {
    /// `&l`: job and page settings.
    JobControl,
    /// `*r`: raster graphics geometry and start/end.
    RasterGraphics,
    /// `*b`: raster offset, compression and data transfer.
    RasterTransfer,
    /// `*p`: cursor positioning.
    CursorPosition,
    /// `&u`: unit of measure.
    UnitOfMeasure,
    /// `*t`: raster resolution.
    RasterResolution,
    /// `%-`: universal exit language.
    UniversalExit,
}

/// What a single parameter decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A displayable setting.
    Setting {
        /// Field name.
        label: &'static str,
        /// Value description.
        value: String,
    },
    /// A raw raster block whose length is the parameter value.
    RasterData,
    /// The terminator is not defined for the group.
    Unknown,
}

impl Field {
    fn raw(label: &'static str, token: &NumericToken) -> Self {
        Field::Setting {
            label,
            value: token.to_string(),
        }
    }

    fn mapped(label: &'static str, token: &NumericToken, value: Option<&'static str>) -> Self {
        Field::Setting {
            label,
            value: value.map_or_else(|| token.to_string(), str::to_string),
        }
    }
}

impl CommandGroup {
    /// Every registered group.
    pub const ALL: [CommandGroup; 7] = [
        CommandGroup::JobControl,
        CommandGroup::RasterGraphics,
        CommandGroup::RasterTransfer,
        CommandGroup::CursorPosition,
        CommandGroup::UnitOfMeasure,
        CommandGroup::RasterResolution,
        CommandGroup::UniversalExit,
    ];

    /// Look up the group named by the two bytes after the escape marker.
    ///
    /// The prefix is case-sensitive: `&l` is a group, `&L` is not.
    pub fn from_prefix(prefix: [u8; 2]) -> Option<Self> {
        match &prefix {
            b"&l" => Some(CommandGroup::JobControl),
            b"*r" => Some(CommandGroup::RasterGraphics),
            b"*b" => Some(CommandGroup::RasterTransfer),
            b"*p" => Some(CommandGroup::CursorPosition),
            b"&u" => Some(CommandGroup::UnitOfMeasure),
            b"*t" => Some(CommandGroup::RasterResolution),
            b"%-" => Some(CommandGroup::UniversalExit),
            _ => None,
        }
    }

    /// The two-byte prefix as text.
    pub fn prefix(self) -> &'static str {
        match self {
            CommandGroup::JobControl => "&l",
            CommandGroup::RasterGraphics => "*r",
            CommandGroup::RasterTransfer => "*b",
            CommandGroup::CursorPosition => "*p",
            CommandGroup::UnitOfMeasure => "&u",
            CommandGroup::RasterResolution => "*t",
            CommandGroup::UniversalExit => "%-",
        }
    }

    /// Short group name for messages.
    pub fn name(self) -> &'static str {
        match self {
            CommandGroup::JobControl => "job control",
            CommandGroup::RasterGraphics => "raster graphics",
            CommandGroup::RasterTransfer => "raster transfer",
            CommandGroup::CursorPosition => "cursor positioning",
            CommandGroup::UnitOfMeasure => "unit of measure",
            CommandGroup::RasterResolution => "raster resolution",
            CommandGroup::UniversalExit => "universal exit",
        }
    }

    /// Decode one parameter of this group.
    pub fn resolve(self, param: &Parameter) -> Field {
        let token = &param.token;
        let field = param.field();
        match self {
            CommandGroup::JobControl => job_control(field, token),
            CommandGroup::RasterGraphics => raster_graphics(field, token),
            CommandGroup::RasterTransfer => match field {
                b'Y' => Field::raw("Number of raster lines of vertical movement", token),
                b'M' => Field::Setting {
                    label: "Set Compression Method",
                    value: COMPRESSION_METHOD.describe(token.as_str()),
                },
                b'W' => Field::RasterData,
                _ => Field::Unknown,
            },
            CommandGroup::CursorPosition => match field {
                b'X' => Field::raw("Horizontal Cursor Positioning", token),
                b'Y' => Field::raw("Number of PCL Units", token),
                b'R' => Field::mapped(
                    "Set Pattern Reference",
                    token,
                    match token.as_str() {
                        "0" => Some("Rotate patterns with print direction"),
                        "1" => Some("Keep patterns fixed"),
                        _ => None,
                    },
                ),
                _ => Field::Unknown,
            },
            CommandGroup::UnitOfMeasure => match field {
                b'D' => Field::raw("Number of units per inch", token),
                _ => Field::Unknown,
            },
            CommandGroup::RasterResolution => match field {
                b'R' => Field::raw("Dots per inch", token),
                _ => Field::Unknown,
            },
            CommandGroup::UniversalExit => match field {
                b'X' => Field::raw("Universal Exit Language", token),
                _ => Field::Unknown,
            },
        }
    }
}

fn job_control(field: u8, token: &NumericToken) -> Field {
    match field {
        b'X' => Field::raw("Number of Copies", token),
        b'S' => Field::raw(
            tables::duplex_mode(token.as_str()).unwrap_or("Unknown Simplex/Duplex"),
            token,
        ),
        b'U' => Field::raw("Left Offset Registration", token),
        b'Z' => Field::raw("Top Offset Registration", token),
        b'T' => Field::raw("Job Separation", token),
        b'G' => Field::raw("Output Bin", token),
        b'A' => Field::Setting {
            label: "Page Size",
            value: PAGE_SIZE.describe(token.as_str()),
        },
        b'H' => Field::Setting {
            label: "Paper Source",
            value: PAPER_SOURCE.describe(token.as_str()),
        },
        b'O' => Field::Setting {
            label: "Logical Page Orientation",
            value: ORIENTATION.describe(token.as_str()),
        },
        b'E' => Field::raw("Top Margin", token),
        b'F' => Field::raw("Text Length", token),
        b'C' => Field::raw("Vertical Motion Index", token),
        b'D' => Field::raw("Line Spacing", token),
        b'L' => Field::raw("Perforation Skip", token),
        _ => Field::Unknown,
    }
}

fn raster_graphics(field: u8, token: &NumericToken) -> Field {
    match field {
        b'T' => Field::raw("Raster Height", token),
        b'S' => Field::raw("Raster Width", token),
        b'A' => Field::mapped(
            "Start Raster Graphics",
            token,
            match token.as_str() {
                "0" => Some("Start graphics at default left graphics margin"),
                "1" => Some("Start graphics at current cursor position (current X-position)"),
                _ => None,
            },
        ),
        b'B' => Field::raw("Old End Raster Graphics", token),
        b'C' => Field::raw("End Raster Graphics", token),
        b'F' => Field::mapped(
            "Raster Graphics Representation",
            token,
            match token.as_str() {
                "0" => Some("Raster image prints in orientation of logical page"),
                "3" => Some("Raster image prints along the width of the physical page"),
                _ => None,
            },
        ),
        _ => Field::Unknown,
    }
}

/// Decode the chained parameters of one group sequence.
///
/// Reads parameters until one ends with an uppercase (non-lowercase)
/// terminator. Raster data blocks are skipped in place and produce no
/// setting.
pub(crate) fn decode_group<R: BufRead>(
    group: CommandGroup,
    cursor: &mut ByteCursor<R>,
    report: &mut ScanReport,
) -> Result<(), DecodeError> {
    loop {
        let param = read_parameter(cursor)?;
        trace!(
            "{} parameter {:?} terminated by {:?}",
            group.prefix(),
            param.token.as_str(),
            param.terminator as char
        );
        match group.resolve(&param) {
            Field::Setting { label, value } => report.push_setting(Setting {
                group: Some(group.prefix().to_string()),
                label: label.to_string(),
                value: Some(value),
                span: param.span,
            }),
            Field::RasterData => skip_raster_data(cursor, &param)?,
            Field::Unknown => {
                report.push_diagnostic(
                    Diagnostic::warn(
                        codes::UNKNOWN_TERMINATOR,
                        format!(
                            "{}: unknown terminator {} ({})",
                            group.name(),
                            describe_byte(param.terminator),
                            param.token
                        ),
                        Some(param.span),
                    )
                    .with_context(BTreeMap::from([
                        ("group".into(), group.prefix().into()),
                        ("terminator".into(), describe_byte(param.terminator)),
                        ("value".into(), param.token.to_string()),
                    ])),
                );
                report.push_setting(Setting {
                    group: Some(group.prefix().to_string()),
                    label: UNKNOWN_LABEL.to_string(),
                    value: Some(param.token.to_string()),
                    span: param.span,
                });
            }
        }
        if !param.is_chained() {
            return Ok(());
        }
    }
}

fn skip_raster_data<R: BufRead>(
    cursor: &mut ByteCursor<R>,
    param: &Parameter,
) -> Result<(), DecodeError> {
    let Some(len) = param.token.to_length() else {
        return Err(DecodeError::InvalidPayloadLength {
            token: param.token.to_string(),
            span: param.span,
        });
    };
    let start = cursor.position();
    let skipped = cursor.skip(len)?;
    if skipped < len {
        return Err(DecodeError::TruncatedPayload {
            expected: len,
            available: skipped,
            span: Span::new(start, cursor.position()),
        });
    }
    debug!("skipped {len} bytes of raster data at offset {start}");
    Ok(())
}

/// Render a byte for messages: `'A' (0x41)` when printable, `0x1b` otherwise.
pub(crate) fn describe_byte(b: u8) -> String {
    if b.is_ascii_graphic() {
        format!("'{}' (0x{b:02x})", b as char)
    } else {
        format!("0x{b:02x}")
    }
}
