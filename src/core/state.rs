// src/core/state.rs

use num_complex::Complex;
use std::fmt;

/// An owned copy of a register's amplitude vector.
///
/// Index `i` stands for the joint basis state in which bit `b` of `i` is the
/// classical value of qubit `b`. Instances handed out by a register are
/// defensive copies: mutating one never touches the register it came from.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Wraps an amplitude vector. No normalization is applied; use
    /// [`check_normalization`](crate::validation::check_normalization) to verify it.
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of basis states (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// `Σ |c_i|²`, which is 1 for a physical state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Consumes the wrapper and returns the raw amplitudes.
    pub fn into_vec(self) -> Vec<Complex<f64>> {
        self.amplitudes
    }
}

impl From<Vec<Complex<f64>>> for StateVector {
    fn from(amplitudes: Vec<Complex<f64>>) -> Self {
        Self::new(amplitudes)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

/// The classical result of collapsing a whole register.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementOutcome {
    /// Sampled basis index.
    index: usize,
    /// `bits[b]` is the value read for qubit `b`.
    bits: Vec<u8>,
}

impl MeasurementOutcome {
    /// Decomposes `index` into `num_qubits` little-endian bits.
    pub fn from_index(index: usize, num_qubits: usize) -> Self {
        let bits = (0..num_qubits).map(|b| ((index >> b) & 1) as u8).collect();
        Self { index, bits }
    }

    /// The basis index the register collapsed to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One classical bit per qubit, qubit 0 first.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// The value read for `qubit`, if the register had that many qubits.
    pub fn bit(&self, qubit: usize) -> Option<u8> {
        self.bits.get(qubit).copied()
    }

    /// Consumes the outcome and returns its per-qubit bits, qubit 0 first.
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }
}

impl fmt::Display for MeasurementOutcome {
    // Written as a ket with the highest qubit on the left, e.g. |10> for qubit 1 set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for bit in self.bits.iter().rev() {
            write!(f, "{}", bit)?;
        }
        write!(f, ">")
    }
}
