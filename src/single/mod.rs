// src/single/mod.rs

//! An independent two-level qubit model: one `α|0> + β|1>` pair per qubit.
//!
//! This model cannot represent entanglement. Its CNOT only acts when the
//! control is a definite `|1>`, so it is suited to isolated single-qubit
//! checks. Use [`QuantumRegister`](crate::QuantumRegister) for anything
//! involving more than one qubit.

pub mod gates;

use crate::core::{DEFAULT_NORM_TOLERANCE, QsimError, Result};
use num_complex::Complex;
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;

/// The amplitude pair `(α, β)` of a single isolated qubit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitState {
    pub alpha: Complex<f64>,
    pub beta: Complex<f64>,
}

impl QubitState {
    /// Builds `α|0> + β|1>`.
    ///
    /// # Errors
    /// * `QsimError::Incoherence` unless `|α|² + |β|²` is 1 within 1e-9.
    pub fn new(alpha: Complex<f64>, beta: Complex<f64>) -> Result<Self> {
        let norm_sq = alpha.norm_sqr() + beta.norm_sqr();
        if (norm_sq - 1.0).abs() > DEFAULT_NORM_TOLERANCE {
            return Err(QsimError::incoherence(format!(
                "Invalid qubit state, |alpha|^2 + |beta|^2 = {} but must be 1",
                norm_sq
            )));
        }
        Ok(Self { alpha, beta })
    }

    /// `|0>`
    pub fn zero() -> Self {
        Self { alpha: Complex::one(), beta: Complex::zero() }
    }

    /// `|1>`
    pub fn one() -> Self {
        Self { alpha: Complex::zero(), beta: Complex::one() }
    }

    /// Rescales `α` and `β` so that `|α|² + |β|² = 1`.
    ///
    /// # Errors
    /// * `QsimError::Incoherence` if both amplitudes are zero.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = (self.alpha.norm_sqr() + self.beta.norm_sqr()).sqrt();
        if norm == 0.0 {
            return Err(QsimError::incoherence("Cannot normalize a qubit state with zero norm"));
        }
        self.alpha /= norm;
        self.beta /= norm;
        Ok(())
    }

    /// Probability of reading 0.
    pub fn prob0(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Probability of reading 1.
    pub fn prob1(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Collapses to `|0>` or `|1>` using the thread-local random source.
    /// Returns `true` when the qubit reads 1.
    pub fn measure(&mut self) -> bool {
        self.measure_with(&mut rand::rng())
    }

    /// Like [`measure`](Self::measure), drawing from the supplied generator.
    pub fn measure_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let r: f64 = rng.random();
        if r < self.prob0() {
            *self = Self::zero();
            false
        } else {
            *self = Self::one();
            true
        }
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4})|0> + ({:.4})|1>", self.alpha, self.beta)
    }
}

/// A standalone qubit starting in `|0>`, driven through [`gates`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Qubit {
    state: QubitState,
}

impl Qubit {
    /// A qubit in `|0>`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies X in place.
    pub fn apply_x(&mut self) -> &mut Self {
        gates::x(&mut self.state);
        self
    }

    /// Applies H in place.
    pub fn apply_h(&mut self) -> &mut Self {
        gates::h(&mut self.state);
        self
    }

    /// Collapses the qubit; `true` means it read 1.
    pub fn measure(&mut self) -> bool {
        self.state.measure()
    }

    /// Like [`measure`](Self::measure), drawing from the supplied generator.
    pub fn measure_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.state.measure_with(rng)
    }

    /// Returns the qubit to `|0>`.
    pub fn reset(&mut self) {
        self.state = QubitState::zero();
    }

    /// Flips this qubit if `control` is a definite `|1>` (see [`gates::cnot`]).
    pub fn apply_cnot(&mut self, control: &Qubit) -> &mut Self {
        gates::cnot(&control.state, &mut self.state);
        self
    }

    /// The current two-level state.
    pub fn state(&self) -> &QubitState {
        &self.state
    }
}
