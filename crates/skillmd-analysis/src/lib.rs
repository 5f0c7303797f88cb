//! # skillmd-analysis
//!
//! **Tier 1 (Analysis Engine)**
//!
//! Pure text-statistics routines over markdown skill files, plus the one
//! file-reading entry point that assembles them into an
//! [`AnalysisReport`](skillmd_types::AnalysisReport).
//!
//! Everything here is a deterministic function of its inputs: no shared
//! state, no caching, no I/O outside [`report::analyze_file`].
//!
//! ## What belongs here
//! * Prose extraction (code-fence stripping)
//! * Heuristic token estimation
//! * N-gram redundancy measurement
//! * Per-section token breakdown
//! * Report assembly and baseline comparison
//!
//! ## What does NOT belong here
//! * CLI argument parsing
//! * Output formatting

#![forbid(unsafe_code)]

mod prose;
mod redundancy;
mod report;
mod sections;
mod tokens;

pub use prose::extract_prose;
pub use redundancy::{DEFAULT_NGRAM_SIZE, measure_redundancy};
pub use report::{
    DEFAULT_BUDGET, DUPLICATE_OUTPUT_CAP, analyze_file, analyze_text, compare_baseline,
};
pub use sections::{PREAMBLE_TITLE, section_breakdown};
pub use tokens::{TOKENS_PER_WORD, estimate_tokens};
