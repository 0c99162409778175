//! Shared test helpers for `pcl_meta_core` integration tests.

#![allow(unreachable_pub)]

use pcl_meta_core::ScanReport;

/// Build a stream from text where `\e` stands for the escape marker.
#[allow(dead_code)]
pub fn pcl(text: &str) -> Vec<u8> {
    text.replace("\\e", "\x1b").into_bytes()
}

/// Human-readable output lines.
#[allow(dead_code)]
pub fn lines(report: &ScanReport) -> Vec<String> {
    report.lines().collect()
}

/// Labels of decoded settings, in order.
#[allow(dead_code)]
pub fn labels(report: &ScanReport) -> Vec<String> {
    report.settings().map(|s| s.label.clone()).collect()
}

/// Diagnostic codes, in order.
#[allow(dead_code)]
pub fn diag_ids(report: &ScanReport) -> Vec<String> {
    report.diagnostics().map(|d| d.id.to_string()).collect()
}
