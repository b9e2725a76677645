// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;
pub mod constants;

// Re-export public types for convenient access via `qsim::core::TypeName`
pub use error::{QsimError, Result};
pub use state::{MeasurementOutcome, StateVector};
pub use constants::{DEFAULT_AMPLITUDE_TOLERANCE, DEFAULT_NORM_TOLERANCE, FRAC_1_SQRT_2};
