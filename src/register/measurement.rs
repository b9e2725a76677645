// src/register/measurement.rs

//! Born-rule readout and inverse-CDF sampling over basis indices.

use log::warn;
use num_complex::Complex;

/// `|c_i|²` for every amplitude.
pub(crate) fn born_probabilities(amplitudes: &[Complex<f64>]) -> Vec<f64> {
    amplitudes.iter().map(|c| c.norm_sqr()).collect()
}

/// Picks a basis index for the uniform draw `r ∈ [0, 1)`.
///
/// Walks the indices in increasing order and returns the first one whose
/// running probability sum exceeds `r`. The comparison is strict so an index
/// with zero probability is never returned, even for `r == 0.0`.
///
/// Rounding can leave the total just below `r`; the last index with non-zero
/// probability is returned in that case (or the last index when every
/// probability is zero).
pub(crate) fn sample_index(probabilities: &[f64], r: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, p) in probabilities.iter().enumerate() {
        cumulative += *p;
        if r < cumulative {
            return index;
        }
    }

    let fallback = probabilities
        .iter()
        .rposition(|p| *p > 0.0)
        .unwrap_or_else(|| probabilities.len().saturating_sub(1));
    warn!(
        "Cumulative probability {} did not exceed draw {}; falling back to index {}",
        cumulative, r, fallback
    );
    fallback
}
