//! Report assembly and baseline comparison.

use std::path::Path;

use anyhow::{Context, Result};
use skillmd_math::signed_pct;
use skillmd_types::{AnalysisReport, BaselineComparison, BudgetStatus};

use crate::prose::extract_prose;
use crate::redundancy::{DEFAULT_NGRAM_SIZE, measure_redundancy};
use crate::sections::section_breakdown;
use crate::tokens::estimate_tokens;

/// Default token budget a skill file should stay under.
pub const DEFAULT_BUDGET: usize = 1200;

/// Cap on duplicate n-grams carried into the emitted report.
pub const DUPLICATE_OUTPUT_CAP: usize = 20;

/// Analyse raw markdown text into a report.
///
/// Token count and sections are computed over the whole document; the
/// redundancy measurement runs over prose only, so boilerplate code blocks
/// do not count as repeated phrasing.
#[must_use]
pub fn analyze_text(file: &str, text: &str, budget: usize) -> AnalysisReport {
    let prose = extract_prose(text);
    let estimate = estimate_tokens(text);
    let redundancy = measure_redundancy(&prose, DEFAULT_NGRAM_SIZE);
    let sections = section_breakdown(text);

    let mut duplicate_ngrams = redundancy.duplicate_ngrams;
    duplicate_ngrams.truncate(DUPLICATE_OUTPUT_CAP);

    AnalysisReport {
        file: file.to_string(),
        tokens_estimated: estimate.tokens_estimated,
        word_count: estimate.word_count,
        redundancy_pct: redundancy.redundancy_pct,
        duplicate_ngrams,
        sections,
        budget_status: BudgetStatus::from_estimate(estimate.tokens_estimated, budget),
        budget_target: budget,
        baseline_comparison: None,
    }
}

/// Read `path` and analyse its contents.
pub fn analyze_file(path: &Path, budget: usize) -> Result<AnalysisReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(analyze_text(&path.display().to_string(), &raw, budget))
}

/// Compute the token delta between a baseline report and the current one.
///
/// A baseline of zero tokens yields a delta percentage of zero. The summary
/// carries an explicit `+` for non-negative deltas.
#[must_use]
pub fn compare_baseline(
    current: &AnalysisReport,
    baseline: &AnalysisReport,
) -> BaselineComparison {
    let delta = current.tokens_estimated as i64 - baseline.tokens_estimated as i64;
    let delta_pct = signed_pct(delta, baseline.tokens_estimated);
    let sign = if delta >= 0 { "+" } else { "" };
    let summary = format!(
        "{} -> {} ({sign}{delta_pct:.1}%)",
        baseline.tokens_estimated, current.tokens_estimated
    );

    BaselineComparison {
        baseline_file: baseline.file.clone(),
        baseline_tokens: baseline.tokens_estimated,
        current_tokens: current.tokens_estimated,
        delta,
        delta_pct,
        summary,
    }
}
