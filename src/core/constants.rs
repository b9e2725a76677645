//! Numerical constants shared by the register, the two-level model and validation.

/// `1/√2`, the Hadamard scale factor.
pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Allowed deviation of `Σ|c_i|²` from 1 before a state counts as incoherent.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Squared magnitude below which an amplitude is treated as zero.
pub const DEFAULT_AMPLITUDE_TOLERANCE: f64 = 1e-12;
