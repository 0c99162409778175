//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Every code listed here has an [`explain`](crate::explain)
//! entry.

// ── Recoverable (sequence-level) ────────────────────────────────────────

/// A byte outside any escape sequence was neither the escape marker nor noise.
pub const UNEXPECTED_BYTE: &str = "PCL1001";

/// The byte after the escape marker is not a command-category byte.
pub const INVALID_COMMAND_BYTE: &str = "PCL1002";

/// Two-byte command with no registered label.
pub const UNKNOWN_COMMAND: &str = "PCL1003";

/// Parameterized command group with no registered handler.
pub const UNKNOWN_GROUP: &str = "PCL1004";

/// End of stream where the second byte of a command group was expected.
pub const INCOMPLETE_GROUP: &str = "PCL1005";

/// Terminator byte not registered for its command group.
pub const UNKNOWN_TERMINATOR: &str = "PCL1006";

// ── Fatal (scan-ending) ─────────────────────────────────────────────────

/// End of stream inside a numeric parameter.
pub const TRUNCATED_NUMBER: &str = "PCL2001";

/// Fewer raster payload bytes remain than the command declared.
pub const TRUNCATED_PAYLOAD: &str = "PCL2002";

/// Raster payload length is not a non-negative integer.
pub const INVALID_PAYLOAD_LENGTH: &str = "PCL2003";

/// All known codes, in numeric order.
pub const ALL: &[&str] = &[
    UNEXPECTED_BYTE,
    INVALID_COMMAND_BYTE,
    UNKNOWN_COMMAND,
    UNKNOWN_GROUP,
    INCOMPLETE_GROUP,
    UNKNOWN_TERMINATOR,
    TRUNCATED_NUMBER,
    TRUNCATED_PAYLOAD,
    INVALID_PAYLOAD_LENGTH,
];
