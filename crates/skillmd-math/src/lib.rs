//! Deterministic numeric helpers shared by the analysis crates.
//!
//! Every percentage in a report goes through [`round_f64`] so that repeated
//! runs over the same input produce byte-identical JSON.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
///
/// Uses `f64::round`, i.e. half-away-from-zero, which is what the report
/// format requires for one-decimal percentages.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Return `numer / denom` as a percentage rounded to one decimal place.
///
/// A zero denominator yields `0.0` rather than NaN.
#[must_use]
pub fn ratio_pct(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        round_f64(numer as f64 / denom as f64 * 100.0, 1)
    }
}

/// Return a signed delta as a percentage of `base`, rounded to one decimal.
///
/// A zero base yields `0.0`.
#[must_use]
pub fn signed_pct(delta: i64, base: usize) -> f64 {
    if base == 0 {
        0.0
    } else {
        round_f64(delta as f64 / base as f64 * 100.0, 1)
    }
}
