//! Scanner configuration.

/// The escape marker introducing every PCL command.
pub const ESCAPE: u8 = 0x1B;

/// Byte classes the scanner treats specially outside escape sequences.
///
/// The defaults match PCL5 output from common drivers: `ESC` introduces
/// commands, and form-feed and line-feed between commands are formatting
/// noise.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Escape marker byte.
    pub escape: u8,
    /// Bytes skipped silently between commands.
    pub ignored: Vec<u8>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            escape: ESCAPE,
            ignored: vec![0x0C, 0x0A],
        }
    }
}

impl ScanConfig {
    /// Replace the set of silently skipped bytes.
    pub fn with_ignored(mut self, ignored: impl Into<Vec<u8>>) -> Self {
        self.ignored = ignored.into();
        self
    }

    pub(crate) fn is_ignored(&self, b: u8) -> bool {
        self.ignored.contains(&b)
    }
}
