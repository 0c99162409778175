//! Static value tables for coded PCL fields.
//!
//! Keys are matched against the numeric token exactly as it appeared in the
//! stream, so `26` resolves but `026` does not. Unmapped codes are shown
//! verbatim by [`LookupTable::describe`].

/// A named mapping from literal numeric codes to descriptions.
#[derive(Debug)]
pub struct LookupTable {
    /// Table name used in logs.
    pub name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl LookupTable {
    const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Description registered for `code`, if any.
    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == code)
            .map(|(_, v)| *v)
    }

    /// Description for `code`, or the code itself when it is not mapped.
    pub fn describe(&self, code: &str) -> String {
        self.lookup(code).unwrap_or(code).to_string()
    }

    /// All `(code, description)` pairs in registration order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// Page size codes (`ESC&l#A`).
pub static PAGE_SIZE: LookupTable = LookupTable::new(
    "page size",
    &[
        ("1", "Executive (7 1/4 x 10 1/2 in.)"),
        ("2", "Letter (8 1/2 x 11 in.)"),
        ("3", "Legal (8 1/2 x 14 in.)"),
        ("6", "Ledger (11 x 17 in.)"),
        ("26", "A4 (210mm x 297mm)"),
        ("27", "A3 (297mm x 420mm)"),
        ("80", "Monarch (Letter - 3 7/8 x 7 1/2 in.)"),
        ("81", "Com-10 (Business - 4 1/8 x 9 1/2 in.)"),
        ("90", "International DL (110mm x 220mm)"),
        ("91", "International C5 (162mm x 229mm)"),
        ("100", "International B5 (176mm x 250mm)"),
    ],
);

/// Paper source codes (`ESC&l#H`).
pub static PAPER_SOURCE: LookupTable = LookupTable::new(
    "paper source",
    &[
        ("0", "Print the current page"),
        ("1", "Feed paper from a printer-specific tray"),
        ("2", "Feed paper from manual input"),
        ("3", "Feed envelope from manual input"),
        ("4", "Feed paper from lower tray"),
        ("5", "Feed from optional paper source"),
        ("6", "Feed envelope from optional envelope feeder"),
    ],
);

/// Logical page orientation codes (`ESC&l#O`).
pub static ORIENTATION: LookupTable = LookupTable::new(
    "orientation",
    &[
        ("0", "Portrait"),
        ("1", "Landscape"),
        ("2", "Reverse Portrait"),
        ("3", "Reverse Landscape"),
    ],
);

/// Raster compression method codes (`ESC*b#M`).
pub static COMPRESSION_METHOD: LookupTable = LookupTable::new(
    "compression method",
    &[
        ("0", "Unencoded"),
        ("1", "Run-length encoding"),
        ("2", "Tagged Imaged File Format (TIFF) rev. 4.0"),
        ("3", "Delta row compression"),
        ("4", "Reserved"),
        ("5", "Adaptive compression"),
    ],
);

/// Simplex/duplex mode (`ESC&l#S`).
pub fn duplex_mode(code: &str) -> Option<&'static str> {
    match code {
        "0" => Some("Simplex"),
        "1" => Some("Duplex, Long-Edge"),
        "2" => Some("Duplex, Short-Edge"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_a4() {
        assert_eq!(PAGE_SIZE.lookup("26"), Some("A4 (210mm x 297mm)"));
        assert_eq!(PAGE_SIZE.describe("26"), "A4 (210mm x 297mm)");
    }

    #[test]
    fn unmapped_code_passes_through() {
        assert_eq!(PAGE_SIZE.lookup("999"), None);
        assert_eq!(PAGE_SIZE.describe("999"), "999");
        assert_eq!(COMPRESSION_METHOD.describe("9"), "9");
    }

    #[test]
    fn lookup_is_literal() {
        assert_eq!(ORIENTATION.lookup("01"), None);
        assert_eq!(ORIENTATION.lookup("+1"), None);
        assert_eq!(ORIENTATION.lookup("1"), Some("Landscape"));
    }

    #[test]
    fn paper_source_table_is_populated() {
        assert_eq!(PAPER_SOURCE.lookup("2"), Some("Feed paper from manual input"));
        assert_eq!(PAPER_SOURCE.entries().len(), 7);
    }

    #[test]
    fn tables_have_unique_keys() {
        for table in [&PAGE_SIZE, &PAPER_SOURCE, &ORIENTATION, &COMPRESSION_METHOD] {
            let mut keys: Vec<_> = table.entries().iter().map(|(k, _)| *k).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), table.entries().len(), "{}", table.name);
        }
    }

    #[test]
    fn duplex_modes() {
        assert_eq!(duplex_mode("0"), Some("Simplex"));
        assert_eq!(duplex_mode("2"), Some("Duplex, Short-Edge"));
        assert_eq!(duplex_mode("3"), None);
    }
}
