// src/simulation/config.rs

use crate::core::{DEFAULT_NORM_TOLERANCE, QsimError, Result};

/// Settings for a [`Simulator`](super::Simulator).
///
/// ```
/// use qsim::SimulatorConfig;
///
/// let config = SimulatorConfig {
///     shots: 100,
///     seed: Some(42),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Number of independent executions of the circuit.
    pub shots: usize,
    /// Seed for the measurement random source. `None` draws a fresh seed
    /// from the thread-local generator on every run.
    pub seed: Option<u64>,
    /// Check the normalization invariant after every gate.
    pub validate_each_step: bool,
    /// Tolerance used by per-step validation.
    pub norm_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
            validate_each_step: false,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    /// # Errors
    /// * `QsimError::InvalidConfig` for zero shots or a tolerance that is not
    ///   a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(QsimError::InvalidConfig {
                message: "shots must be at least 1".to_string(),
            });
        }
        if !(self.norm_tolerance.is_finite() && self.norm_tolerance > 0.0) {
            return Err(QsimError::InvalidConfig {
                message: format!("norm_tolerance must be positive, got {}", self.norm_tolerance),
            });
        }
        Ok(())
    }
}
