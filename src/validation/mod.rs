// src/validation/mod.rs

//! Checks that amplitude vectors satisfy the register invariants.

use crate::core::{DEFAULT_AMPLITUDE_TOLERANCE, DEFAULT_NORM_TOLERANCE, QsimError, Result};
use num_complex::Complex;

/// Checks that the amplitudes are normalized (`Σ|c_i|² ≈ 1`).
///
/// # Arguments
/// * `amplitudes` - The amplitude vector to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QsimError::Incoherence)` otherwise.
pub fn check_normalization(amplitudes: &[Complex<f64>], tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = amplitudes.iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QsimError::incoherence(format!(
            "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
            norm_sq, effective_tolerance
        )))
    } else {
        Ok(())
    }
}

/// Checks that the amplitudes describe a collapsed basis state: exactly one
/// entry with magnitude 1, every other entry negligible.
///
/// # Returns
/// * `Ok(index)` of the surviving basis state.
/// * `Err(QsimError::Incoherence)` if the vector is still in superposition.
pub fn check_collapsed(amplitudes: &[Complex<f64>], tolerance: Option<f64>) -> Result<usize> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let mut significant = amplitudes
        .iter()
        .enumerate()
        .filter(|(_, c)| c.norm_sqr() > DEFAULT_AMPLITUDE_TOLERANCE);

    match (significant.next(), significant.next()) {
        (Some((index, c)), None) if (c.norm() - 1.0).abs() <= effective_tolerance => Ok(index),
        (Some((index, c)), None) => Err(QsimError::incoherence(format!(
            "Collapsed amplitude at index {} has magnitude {} instead of 1",
            index,
            c.norm()
        ))),
        (None, _) => Err(QsimError::incoherence("State vector has no significant amplitude")),
        (Some((first, _)), Some((second, _))) => Err(QsimError::incoherence(format!(
            "State vector is not collapsed: indices {} and {} both carry amplitude",
            first, second
        ))),
    }
}
