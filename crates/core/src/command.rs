//! Command dispatch: what follows an escape marker.
//!
//! The first byte after `ESC` picks the command shape. Bytes 48..=126 are
//! complete two-byte commands (`ESC E`); bytes 33..=47 open a parameterized
//! group whose second byte completes the group prefix (`ESC & l`).

use std::collections::BTreeMap;
use std::io::BufRead;

use log::debug;
use pcl_meta_diagnostics::{Diagnostic, Span, codes};

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::group::{CommandGroup, decode_group, describe_byte};
use crate::report::{ScanReport, Setting};

/// Shape of the command introduced by the byte after an escape marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
    /// A complete two-byte command.
    TwoByte,
    /// The first byte of a parameterized group prefix.
    Group,
    /// Not a command byte.
    Invalid,
}

/// Classify the byte following an escape marker.
pub fn classify(b: u8) -> CommandClass {
    match b {
        48..=126 => CommandClass::TwoByte,
        33..=47 => CommandClass::Group,
        _ => CommandClass::Invalid,
    }
}

/// Two-byte commands and their labels.
pub const TWO_BYTE_COMMANDS: &[(u8, &str)] = &[
    (b'E', "RESET"),
    (b'9', "RESET MARGIN"),
    (b'Y', "DISPLAY FUNCTIONS ON"),
    (b'Z', "DISPLAY FUNCTIONS OFF"),
    (b'=', "HALF-LINE FEED"),
];

/// Label of a two-byte command, if registered.
pub fn two_byte_label(b: u8) -> Option<&'static str> {
    TWO_BYTE_COMMANDS
        .iter()
        .find(|(k, _)| *k == b)
        .map(|(_, label)| *label)
}

/// Decode one escape sequence whose first command byte has been read.
///
/// `esc_at` is the offset of the escape marker. Unrecognized sequences are
/// reported and abandoned; only truncation and I/O failure return `Err`.
pub(crate) fn dispatch<R: BufRead>(
    esc_at: usize,
    first: u8,
    cursor: &mut ByteCursor<R>,
    report: &mut ScanReport,
) -> Result<(), DecodeError> {
    match classify(first) {
        CommandClass::TwoByte => {
            let span = Span::new(esc_at, cursor.position());
            match two_byte_label(first) {
                Some(label) => {
                    debug!("two-byte command {:?} at {esc_at}", first as char);
                    report.push_setting(Setting {
                        group: None,
                        label: label.to_string(),
                        value: None,
                        span,
                    });
                }
                None => report.push_diagnostic(
                    Diagnostic::warn(
                        codes::UNKNOWN_COMMAND,
                        format!("unknown command ESC {}", describe_byte(first)),
                        Some(span),
                    )
                    .with_context(BTreeMap::from([("byte".into(), describe_byte(first))])),
                ),
            }
            Ok(())
        }
        CommandClass::Group => {
            let Some(second) = cursor.next_byte()? else {
                report.push_diagnostic(Diagnostic::warn(
                    codes::INCOMPLETE_GROUP,
                    format!(
                        "stream ended after ESC {}, expected a group byte",
                        describe_byte(first)
                    ),
                    Some(Span::new(esc_at, cursor.position())),
                ));
                return Ok(());
            };
            let span = Span::new(esc_at, cursor.position());
            match CommandGroup::from_prefix([first, second]) {
                Some(group) => {
                    debug!("command group {} at {esc_at}", group.prefix());
                    decode_group(group, cursor, report)
                }
                None => {
                    let prefix = format!("{}{}", first as char, char::from(second).escape_default());
                    report.push_diagnostic(
                        Diagnostic::warn(
                            codes::UNKNOWN_GROUP,
                            format!("unknown command group {prefix}"),
                            Some(span),
                        )
                        .with_context(BTreeMap::from([("group".into(), prefix)])),
                    );
                    Ok(())
                }
            }
        }
        CommandClass::Invalid => {
            report.push_diagnostic(
                Diagnostic::warn(
                    codes::INVALID_COMMAND_BYTE,
                    format!("invalid command byte {} after ESC", describe_byte(first)),
                    Some(Span::new(esc_at, cursor.position())),
                )
                .with_context(BTreeMap::from([("byte".into(), describe_byte(first))])),
            );
            Ok(())
        }
    }
}
