//! Terminal and JSON rendering of scan reports.
//!
//! Pretty output keeps stream order: decoded settings and diagnostics go to
//! stdout interleaved exactly as they were found, with the severity tag
//! coloured. JSON output is a single object for machine consumption.

use ariadne::{Color, Fmt};
use pcl_meta_core::{Record, ScanReport};
use pcl_meta_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// One human-readable line per record.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Resolve the explicit choice; line output unless JSON was asked for.
    pub(crate) fn resolve(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            _ => Format::Pretty,
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Info => Color::Blue,
        _ => Color::White,
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

fn render_diagnostic(diag: &Diagnostic, explain: bool) {
    let tag = format!("{}[{}]", diag.severity, diag.id);
    match diag.span {
        Some(span) => println!(
            "{}: {} (at byte {})",
            tag.fg(severity_color(&diag.severity)),
            diag.message,
            span.start
        ),
        None => println!(
            "{}: {}",
            tag.fg(severity_color(&diag.severity)),
            diag.message
        ),
    }
    if explain && let Some(text) = diag.explain() {
        println!("  = help: {text}");
    }
}

/// Print every record to stdout in stream order.
pub(crate) fn render_report_pretty(report: &ScanReport, explain: bool) {
    for record in &report.records {
        match record {
            Record::Setting(s) => println!("{s}"),
            Record::Diagnostic(d) => render_diagnostic(d, explain),
        }
    }
}

// ── JSON rendering ──────────────────────────────────────────────────────

/// Render the report as one JSON object on stdout.
pub(crate) fn render_report_json(file: &str, report: &ScanReport) -> anyhow::Result<()> {
    let out = serde_json::json!({
        "file": file,
        "records": report.records,
        "halted": report.halted,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

// ── Summary line ────────────────────────────────────────────────────────

/// Print a coloured summary line to stderr.
///
/// Example: `12 settings, 1 error, 2 warnings`
pub(crate) fn print_summary(report: &ScanReport) {
    let (mut errors, mut warnings) = (0usize, 0usize);
    for d in report.diagnostics() {
        match d.severity {
            Severity::Error => errors += 1,
            _ => warnings += 1,
        }
    }
    let settings = report.settings().count();

    let s = if settings == 1 { "" } else { "s" };
    let mut parts = vec![format!("{settings} setting{s}")];
    if errors > 0 {
        let s = if errors == 1 { "" } else { "s" };
        parts.push(format!("{}", format!("{errors} error{s}").fg(Color::Red)));
    }
    if warnings > 0 {
        let s = if warnings == 1 { "" } else { "s" };
        parts.push(format!(
            "{}",
            format!("{warnings} warning{s}").fg(Color::Yellow)
        ));
    }
    if report.halted {
        parts.push("stopped early".to_string());
    }
    eprintln!("{}", parts.join(", "));
}
