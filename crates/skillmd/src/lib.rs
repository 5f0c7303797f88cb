//! # skillmd
//!
//! **CLI Binary**
//!
//! Entry point for the `skillmd` command-line application. It parses
//! arguments, validates the input paths, and hands the work to
//! `skillmd-analysis`.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Validate that input and baseline files exist
//! * Emit the JSON report to stdout
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

#![forbid(unsafe_code)]

mod error_hints;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use skillmd_analysis::{DEFAULT_BUDGET, analyze_file, compare_baseline};

/// `skillmd` — token budget and redundancy receipts for markdown skill files.
///
/// Analyses one markdown file and prints a JSON report with an estimated
/// token count, a prose redundancy percentage, a per-section breakdown,
/// and a PASS/FAIL verdict against the token budget.
#[derive(Parser, Debug)]
#[command(name = "skillmd", version, about, long_about = None)]
pub struct Cli {
    /// Markdown file to analyse.
    ///
    /// Declared optional so the missing-argument case exits 1 with a usage
    /// line instead of clap's exit code 2.
    pub file: Option<PathBuf>,

    /// Baseline file for token delta comparison.
    #[arg(long, value_name = "PATH")]
    pub baseline: Option<PathBuf>,

    /// Token budget the document must stay within (inclusive).
    #[arg(long, value_name = "TOKENS", default_value_t = DEFAULT_BUDGET)]
    pub budget: usize,
}

/// Entry point used by the `skillmd` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(file) = cli.file else {
        bail!("Usage: skillmd <skill.md> [--baseline <path>] [--budget <n>]");
    };
    if !file.exists() {
        bail!("File not found: {}", file.display());
    }

    let mut report = analyze_file(&file, cli.budget)?;

    if let Some(baseline_path) = cli.baseline {
        if !baseline_path.exists() {
            bail!("Baseline file not found: {}", baseline_path.display());
        }
        let baseline = analyze_file(&baseline_path, cli.budget)?;
        report.baseline_comparison = Some(compare_baseline(&report, &baseline));
    }

    let stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(stdout, &report)?;
    println!();
    Ok(())
}

/// Format an error chain for stderr, with hints where we recognize the cause.
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
