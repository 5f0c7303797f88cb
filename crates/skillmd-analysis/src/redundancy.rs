//! Word n-gram redundancy measurement.

use std::collections::HashMap;

use skillmd_math::ratio_pct;
use skillmd_types::RedundancyReport;

/// Window size used for the emitted report.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Measure repeated phrasing in prose text using word n-grams of size `n`.
///
/// Normalization lowercases the text and strips anything that is not an
/// ASCII word character or whitespace, so pure case or punctuation changes
/// do not affect the result. Each n-gram seen `k > 1` times contributes
/// `k - 1` duplicates; the first occurrence is original. Duplicates are
/// reported in first-seen order.
#[must_use]
pub fn measure_redundancy(prose: &str, n: usize) -> RedundancyReport {
    let normalized: String = prose
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace())
        .collect();
    let words: Vec<&str> = normalized.split_whitespace().collect();

    if n == 0 || words.len() < n {
        return RedundancyReport::empty();
    }

    let total_ngrams = words.len() - n + 1;
    let mut freq: HashMap<String, usize> = HashMap::with_capacity(total_ngrams);
    let mut first_seen: Vec<String> = Vec::new();

    for window in words.windows(n) {
        let gram = window.join(" ");
        let count = freq.entry(gram.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(gram);
        }
        *count += 1;
    }

    let mut duplicate_ngrams = Vec::new();
    let mut duplicate_count = 0usize;
    for gram in first_seen {
        let count = freq[&gram];
        if count > 1 {
            // excess occurrences beyond the first
            duplicate_count += count - 1;
            duplicate_ngrams.push(gram);
        }
    }

    RedundancyReport {
        redundancy_pct: ratio_pct(duplicate_count, total_ngrams),
        duplicate_ngrams,
        total_ngrams,
    }
}
