//! Fuzz smoke tests for the scanner.
//!
//! These tests feed random, adversarial, and edge-case byte streams to the
//! scanner to verify it never panics and that basic structural invariants
//! hold on every `ScanReport`.
//!
//! No external crate dependencies are used; a simple deterministic PRNG
//! provides reproducible randomness.

mod common;

use common::pcl;
use pcl_meta_core::{Record, ScanReport, codes, scan_bytes};

// ─── Simple deterministic PRNG (LCG) ────────────────────────────────────────

struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range(&mut self, max: usize) -> usize {
        (self.next() as usize) % max
    }

    fn gen_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| (self.next() >> 33) as u8).collect()
    }
}

// ─── Invariant checking ─────────────────────────────────────────────────────

/// Assert structural invariants on any `ScanReport`, regardless of input.
fn assert_invariants(report: &ScanReport, input: &[u8]) {
    let mut last_start = 0usize;
    for record in &report.records {
        let span = match record {
            Record::Setting(s) => Some(s.span),
            Record::Diagnostic(d) => d.span,
        };
        if let Some(span) = span {
            assert!(span.start <= span.end, "inverted span {span:?}");
            assert!(
                span.end <= input.len(),
                "span end ({}) > input len ({})",
                span.end,
                input.len()
            );
            assert!(
                span.start >= last_start,
                "records out of stream order at {span:?}"
            );
            last_start = span.start;
        }
    }

    let fatal = report.diagnostics().filter(|d| d.is_error()).count();
    if report.halted {
        assert_eq!(fatal, 1, "a halted scan reports exactly one error");
        assert!(
            matches!(report.records.last(), Some(Record::Diagnostic(d)) if d.is_error()),
            "the fatal diagnostic is the last record"
        );
    } else {
        assert_eq!(fatal, 0, "errors only occur on halted scans");
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[test]
fn random_bytes_never_panic() {
    let mut rng = SimpleRng::new(0x5eed);
    for _ in 0..500 {
        let len = rng.gen_range(256);
        let input = rng.gen_bytes(len);
        let report = scan_bytes(&input);
        assert_invariants(&report, &input);
    }
}

#[test]
fn random_command_soup_never_panics() {
    const PIECES: &[&str] = &[
        "\\e", "&l", "*r", "*b", "*p", "&u", "*t", "%-", "(s", "E", "e", "W", "w", "0", "12",
        "-", "+", ".", "A", "x", "\n", "\x0c", "9",
    ];
    let mut rng = SimpleRng::new(42);
    for _ in 0..500 {
        let mut text = String::new();
        for _ in 0..rng.gen_range(40) {
            text.push_str(PIECES[rng.gen_range(PIECES.len())]);
        }
        let input = pcl(&text);
        let report = scan_bytes(&input);
        assert_invariants(&report, &input);
    }
}

#[test]
fn long_chain_does_not_grow_the_stack() {
    let mut input = b"\x1b&l".to_vec();
    for _ in 0..100_000 {
        input.extend_from_slice(b"1x");
    }
    input.extend_from_slice(b"1X");
    let report = scan_bytes(&input);
    assert_eq!(report.settings().count(), 100_001);
    assert_invariants(&report, &input);
}

#[test]
fn huge_declared_payload_is_truncation_not_allocation() {
    let input = b"\x1b*b99999999999W\x00\x01";
    let report = scan_bytes(input);
    assert!(report.halted);
    assert_eq!(
        report.diagnostics().next().map(|d| d.id.to_string()),
        Some(codes::TRUNCATED_PAYLOAD.to_string())
    );
    assert_invariants(&report, input);
}

#[test]
fn every_single_byte_after_escape() {
    for b in 0u8..=255 {
        let input = [0x1b, b, b'1', b'X', 0x1b, b'E'];
        let report = scan_bytes(&input);
        assert_invariants(&report, &input);
    }
}
