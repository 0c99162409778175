mod render;

use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use pcl_meta_core::{ScanReport, scan_reader};

use crate::render::{Format, print_summary, render_report_json, render_report_pretty};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "pcl-meta",
    version,
    about = "List the page, paper and raster settings embedded in a PCL5 print stream"
)]
struct Cli {
    /// PCL file to decode (`-` reads stdin).
    file: String,

    /// Output mode: "pretty" for one line per setting, "json" for
    /// machine-readable JSON. Defaults to "pretty".
    #[arg(long, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Print an explanation under each diagnostic (pretty output only).
    #[arg(long)]
    explain: bool,
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let format = Format::resolve(cli.output.as_deref());

    let report = scan_file(&cli.file)?;
    info!(
        "{}: {} records{}",
        cli.file,
        report.records.len(),
        if report.halted { " (halted)" } else { "" }
    );

    match format {
        Format::Json => render_report_json(&cli.file, &report)?,
        Format::Pretty => {
            println!("read file: {}", cli.file);
            render_report_pretty(&report, cli.explain);
            print_summary(&report);
        }
    }

    exit_on_errors(&report);
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn scan_file(path: &str) -> Result<ScanReport> {
    if path == "-" {
        return scan_reader(io::stdin().lock()).context("failed to read stdin");
    }
    let file = File::open(path).with_context(|| format!("failed to open '{path}'"))?;
    scan_reader(BufReader::new(file)).with_context(|| format!("failed to read '{path}'"))
}

/// Exit with code 1 if decoding stopped on an error.
/// Warnings do not cause a non-zero exit.
fn exit_on_errors(report: &ScanReport) {
    if report.has_errors() {
        process::exit(1);
    }
}
