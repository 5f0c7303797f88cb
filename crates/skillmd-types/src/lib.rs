//! # skillmd-types
//!
//! **Tier 0 (Core Types)**
//!
//! Data structures and Serde contracts for skillmd analysis reports.
//!
//! The primary contract is the emitted JSON: field names and value shapes
//! are stable (`duplicate_3grams`, `budget_status` as `"PASS"`/`"FAIL"`,
//! sections as an object in first-seen order, `baseline_comparison: null`
//! when absent). Renaming or removing a field breaks report consumers.
//!
//! ## What belongs here
//! * Pure data structs (estimates, reports, comparisons)
//! * Serialization/Deserialization logic
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Analysis logic

#![forbid(unsafe_code)]

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Word count and heuristic token estimate for a piece of text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenEstimate {
    pub word_count: usize,
    pub tokens_estimated: usize,
}

/// Redundancy measurement over prose text.
///
/// `duplicate_ngrams` holds every repeated n-gram in first-seen order; the
/// assembled [`AnalysisReport`] caps the list for output, this type does not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedundancyReport {
    pub redundancy_pct: f64,
    pub duplicate_ngrams: Vec<String>,
    pub total_ngrams: usize,
}

impl RedundancyReport {
    /// The zero report returned for documents shorter than the n-gram size.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            redundancy_pct: 0.0,
            duplicate_ngrams: Vec::new(),
            total_ngrams: 0,
        }
    }
}

/// One section title with its accumulated token estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRow {
    pub title: String,
    pub tokens: usize,
}

/// Per-section token estimates in first-seen header order.
///
/// Serialized as a JSON object, not an array, so the report reads as
/// `"sections": { "Title": 8, ... }`. Insertion order is preserved because
/// reviewers diff reports between revisions and a reordered map is noise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBreakdown {
    rows: Vec<SectionRow>,
}

impl SectionBreakdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tokens` to the bucket for `title`, creating it on first sight.
    pub fn add(&mut self, title: &str, tokens: usize) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.title == title) {
            row.tokens += tokens;
        } else {
            self.rows.push(SectionRow {
                title: title.to_string(),
                tokens,
            });
        }
    }

    #[must_use]
    pub fn get(&self, title: &str) -> Option<usize> {
        self.rows.iter().find(|r| r.title == title).map(|r| r.tokens)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionRow> {
        self.rows.iter()
    }

    /// Sum of all section estimates, preamble included.
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.rows.iter().map(|r| r.tokens).sum()
    }
}

impl Serialize for SectionBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in &self.rows {
            map.serialize_entry(&row.title, &row.tokens)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = SectionBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of section titles to token counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = SectionBreakdown::new();
                while let Some((title, tokens)) = access.next_entry::<String, usize>()? {
                    out.add(&title, tokens);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(SectionVisitor)
    }
}

/// Verdict against the token budget. The boundary is inclusive: a document
/// estimated at exactly the budget passes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl BudgetStatus {
    #[must_use]
    pub fn from_estimate(tokens_estimated: usize, budget: usize) -> Self {
        if tokens_estimated <= budget {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

/// Token delta between a baseline document and the current one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaselineComparison {
    pub baseline_file: String,
    pub baseline_tokens: usize,
    pub current_tokens: usize,
    pub delta: i64,
    pub delta_pct: f64,
    pub summary: String,
}

/// The full analysis report emitted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub file: String,
    pub tokens_estimated: usize,
    pub word_count: usize,
    pub redundancy_pct: f64,
    /// Repeated 3-grams, first-seen order, capped at 20 entries.
    #[serde(rename = "duplicate_3grams")]
    pub duplicate_ngrams: Vec<String>,
    pub sections: SectionBreakdown,
    pub budget_status: BudgetStatus,
    pub budget_target: usize,
    pub baseline_comparison: Option<BaselineComparison>,
}
