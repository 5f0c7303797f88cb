//! Heuristic token estimation.

use skillmd_types::TokenEstimate;

/// Calibration multiplier from words to LLM tokens.
///
/// Tracks cl100k_base within roughly 10% on English markdown. This is a
/// heuristic, not a tokenizer; treat the estimate accordingly.
pub const TOKENS_PER_WORD: f64 = 1.33;

/// Count whitespace-delimited words and estimate the token cost.
#[must_use]
pub fn estimate_tokens(text: &str) -> TokenEstimate {
    let word_count = text.split_whitespace().count();
    let tokens_estimated = (word_count as f64 * TOKENS_PER_WORD).round() as usize;
    TokenEstimate {
        word_count,
        tokens_estimated,
    }
}
