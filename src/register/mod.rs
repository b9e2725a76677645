// src/register/mod.rs

//! The dense state-vector register.
//!
//! A [`QuantumRegister`] of `n` qubits owns `2^n` complex amplitudes. Gates are
//! applied by bit-indexed kernels that read the live buffer and write a
//! pre-sized scratch buffer, after which the two buffers swap. Measurement
//! samples one basis index by the Born rule and collapses the vector onto it.

mod gates;
mod handle;
mod measurement;

pub use handle::QubitRef;

use crate::core::{MeasurementOutcome, QsimError, Result, StateVector};
use crate::validation::check_normalization;
use gates::qubit_mask;
use log::{debug, trace};
use num_complex::Complex;
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;

/// A register of `num_qubits` qubits stored as its full joint amplitude vector.
///
/// Basis index `i` encodes qubit `b` in bit `b` of `i`. The register starts in
/// `|0...0>` and every mutator keeps `Σ|c_i|² = 1` (up to rounding).
///
/// # Examples
///
/// ```
/// use qsim::{QuantumRegister, QsimError};
///
/// # fn main() -> Result<(), QsimError> {
/// let mut register = QuantumRegister::new(2)?;
/// register.h(0)?.cnot(0, 1)?;
///
/// let probs = register.probabilities();
/// assert!((probs[0] - 0.5).abs() < 1e-10);
/// assert!((probs[3] - 0.5).abs() < 1e-10);
///
/// let bits = register.measure();
/// assert_eq!(bits[0], bits[1]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QuantumRegister {
    num_qubits: usize,
    /// Live amplitudes, length `2^num_qubits`.
    amplitudes: Vec<Complex<f64>>,
    /// Output buffer for the next gate. Its contents between gates are stale.
    scratch: Vec<Complex<f64>>,
}

impl QuantumRegister {
    /// Creates a register in the all-zero basis state.
    ///
    /// # Errors
    /// * `QsimError::InvalidRegister` if `num_qubits` is zero, `2^num_qubits`
    ///   does not fit in `usize`, or the amplitude buffers cannot be allocated.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QsimError::InvalidRegister {
                message: "Cannot create a register with zero qubits".to_string(),
            });
        }
        let dim = u32::try_from(num_qubits)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .filter(|dim| {
                dim.checked_mul(std::mem::size_of::<Complex<f64>>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| QsimError::InvalidRegister {
                message: format!("{} qubits overflow the state vector dimension", num_qubits),
            })?;

        let mut amplitudes = zeroed_buffer(dim, num_qubits)?;
        let scratch = zeroed_buffer(dim, num_qubits)?;
        amplitudes[0] = Complex::one();
        debug!("Allocated {}-qubit register (dim {})", num_qubits, dim);

        Ok(Self {
            num_qubits,
            amplitudes,
            scratch,
        })
    }

    /// Number of qubits fixed at construction.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states (`2^num_qubits`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Applies the Hadamard gate to qubit `index`.
    ///
    /// # Errors
    /// * `QsimError::QubitOutOfRange` if `index >= num_qubits`.
    pub fn h(&mut self, index: usize) -> Result<&mut Self> {
        self.check_index(index)?;
        self.apply_h(index);
        Ok(self)
    }

    /// Applies the Pauli-X (NOT) gate to qubit `index`.
    ///
    /// # Errors
    /// * `QsimError::QubitOutOfRange` if `index >= num_qubits`.
    pub fn x(&mut self, index: usize) -> Result<&mut Self> {
        self.check_index(index)?;
        self.apply_x(index);
        Ok(self)
    }

    /// Flips qubit `target` in every basis state where qubit `control` is 1.
    ///
    /// # Errors
    /// * `QsimError::QubitOutOfRange` if either index is out of range.
    /// * `QsimError::InvalidOperation` if `control == target`.
    pub fn cnot(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.check_index(control)?;
        self.check_index(target)?;
        if control == target {
            return Err(QsimError::invalid_operation(format!(
                "Control and target qubits cannot be the same for CNOT (both {})",
                control
            )));
        }
        self.apply_cnot(control, target);
        Ok(self)
    }

    /// Born-rule probability of each basis index. Does not mutate the register.
    pub fn probabilities(&self) -> Vec<f64> {
        measurement::born_probabilities(&self.amplitudes)
    }

    /// Marginal probability that qubit `index` reads 1.
    ///
    /// # Errors
    /// * `QsimError::QubitOutOfRange` if `index >= num_qubits`.
    pub fn probability_of_one(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.marginal_one(index))
    }

    /// Collapses the register using the thread-local random source and returns
    /// one classical bit per qubit (qubit 0 first).
    pub fn measure(&mut self) -> Vec<u8> {
        self.measure_with(&mut rand::rng())
    }

    /// Like [`measure`](Self::measure), drawing from the supplied generator.
    /// A seeded generator gives reproducible outcomes.
    pub fn measure_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<u8> {
        self.measure_outcome_with(rng).into_bits()
    }

    /// Collapses the register and returns the sampled basis index together
    /// with its bit decomposition.
    ///
    /// After the call exactly one amplitude is non-zero and it equals `1+0i`.
    pub fn measure_outcome_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MeasurementOutcome {
        let probabilities = self.probabilities();
        let r: f64 = rng.random();
        let outcome = measurement::sample_index(&probabilities, r);

        self.amplitudes.fill(Complex::zero());
        self.amplitudes[outcome] = Complex::one();

        let outcome = MeasurementOutcome::from_index(outcome, self.num_qubits);
        debug!("Register collapsed to {} (draw {:.6})", outcome, r);
        outcome
    }

    /// A defensive copy of the amplitudes.
    pub fn state_snapshot(&self) -> Vec<Complex<f64>> {
        self.amplitudes.clone()
    }

    /// A defensive copy of the amplitudes wrapped as a [`StateVector`].
    pub fn state(&self) -> StateVector {
        StateVector::new(self.state_snapshot())
    }

    /// Checks the normalization invariant against `tolerance` (default 1e-9).
    ///
    /// # Errors
    /// * `QsimError::Incoherence` if `Σ|c_i|²` deviates from 1 by more than the tolerance.
    pub fn validate(&self, tolerance: Option<f64>) -> Result<()> {
        check_normalization(&self.amplitudes, tolerance)
    }

    /// Borrows a single-qubit handle for chained gate calls on `index`.
    ///
    /// # Errors
    /// * `QsimError::QubitOutOfRange` if `index >= num_qubits`.
    pub fn qubit(&mut self, index: usize) -> Result<QubitRef<'_>> {
        self.check_index(index)?;
        Ok(QubitRef::new(self, index))
    }

    // --- Unchecked gate application. Callers have validated the indices. ---

    pub(crate) fn apply_h(&mut self, index: usize) {
        trace!("H on qubit {}", index);
        gates::hadamard(&self.amplitudes, &mut self.scratch, qubit_mask(index));
        self.swap_buffers();
    }

    pub(crate) fn apply_x(&mut self, index: usize) {
        trace!("X on qubit {}", index);
        gates::pauli_x(&self.amplitudes, &mut self.scratch, qubit_mask(index));
        self.swap_buffers();
    }

    pub(crate) fn apply_cnot(&mut self, control: usize, target: usize) {
        trace!("CNOT control {} target {}", control, target);
        gates::controlled_x(
            &self.amplitudes,
            &mut self.scratch,
            qubit_mask(control),
            qubit_mask(target),
        );
        self.swap_buffers();
    }

    pub(crate) fn marginal_one(&self, index: usize) -> f64 {
        let mask = qubit_mask(index);
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, c)| c.norm_sqr())
            .sum()
    }

    fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.amplitudes, &mut self.scratch);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.num_qubits {
            Ok(())
        } else {
            Err(QsimError::out_of_range(index, self.num_qubits))
        }
    }
}

fn zeroed_buffer(dim: usize, num_qubits: usize) -> Result<Vec<Complex<f64>>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(dim)
        .map_err(|e| QsimError::InvalidRegister {
            message: format!("Cannot allocate {} amplitudes for {} qubits: {}", dim, num_qubits, e),
        })?;
    buffer.resize(dim, Complex::zero());
    Ok(buffer)
}

// The scratch buffer holds stale data and takes no part in equality or
// debug output.
impl PartialEq for QuantumRegister {
    fn eq(&self, other: &Self) -> bool {
        self.num_qubits == other.num_qubits && self.amplitudes == other.amplitudes
    }
}

impl fmt::Debug for QuantumRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantumRegister")
            .field("num_qubits", &self.num_qubits)
            .field("amplitudes", &self.amplitudes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FRAC_1_SQRT_2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_complex_vec_approx_equal(actual: &[Complex<f64>], expected: &[Complex<f64>], context: &str) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, Context: {}",
                i, actual[i], expected[i], context
            );
        }
    }

    #[test]
    fn test_new_starts_in_all_zero_state() -> Result<()> {
        let register = QuantumRegister::new(3)?;
        assert_eq!(register.num_qubits(), 3);
        assert_eq!(register.dim(), 8);
        let state = register.state_snapshot();
        assert_eq!(state[0], Complex::one());
        assert!(state[1..].iter().all(|c| c.is_zero()));
        Ok(())
    }

    #[test]
    fn test_new_rejects_zero_and_overflowing_sizes() {
        assert!(matches!(QuantumRegister::new(0), Err(QsimError::InvalidRegister { .. })));
        assert!(matches!(
            QuantumRegister::new(usize::BITS as usize),
            Err(QsimError::InvalidRegister { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_new_reports_unallocatable_register() {
        // 2^58 amplitudes pass the size check but exceed any address space.
        match QuantumRegister::new(58) {
            Err(QsimError::InvalidRegister { message }) => {
                assert!(message.contains("Cannot allocate"), "Incorrect error message: {}", message);
            }
            other => panic!("Expected InvalidRegister error, got {:?}", other.map(|r| r.num_qubits())),
        }
    }

    #[test]
    fn test_debug_omits_scratch_buffer() -> Result<()> {
        let mut register = QuantumRegister::new(1)?;
        register.x(0)?;
        let text = format!("{:?}", register);
        assert!(text.starts_with("QuantumRegister { num_qubits: 1, amplitudes: ["), "{}", text);
        assert!(!text.contains("scratch"), "{}", text);
        Ok(())
    }

    #[test]
    fn test_gates_reject_out_of_range_indices() -> Result<()> {
        let mut register = QuantumRegister::new(2)?;
        assert_eq!(register.h(2).unwrap_err(), QsimError::out_of_range(2, 2));
        assert_eq!(register.x(7).unwrap_err(), QsimError::out_of_range(7, 2));
        assert_eq!(register.cnot(0, 2).unwrap_err(), QsimError::out_of_range(2, 2));
        assert!(register.qubit(2).is_err());
        // Rejected calls leave the state untouched.
        assert_eq!(register.state_snapshot(), QuantumRegister::new(2)?.state_snapshot());
        Ok(())
    }

    #[test]
    fn test_cnot_rejects_same_control_and_target() -> Result<()> {
        let mut register = QuantumRegister::new(2)?;
        assert!(matches!(register.cnot(1, 1), Err(QsimError::InvalidOperation { .. })));
        Ok(())
    }

    #[test]
    fn test_h_then_cnot_on_three_qubits() -> Result<()> {
        let mut register = QuantumRegister::new(3)?;
        register.h(1)?.cnot(1, 2)?;
        // (|000> + |110>)/√2 -> indices 0 and 6
        let f = Complex::new(FRAC_1_SQRT_2, 0.0);
        let z = Complex::zero();
        assert_complex_vec_approx_equal(
            &register.state_snapshot(),
            &[f, z, z, z, z, z, f, z],
            "Bell pair on qubits 1 and 2",
        );
        assert!((register.probability_of_one(2)? - 0.5).abs() < TEST_TOLERANCE);
        assert!(register.probability_of_one(0)?.abs() < TEST_TOLERANCE);
        Ok(())
    }

    #[test]
    fn test_snapshot_is_defensive() -> Result<()> {
        let register = QuantumRegister::new(1)?;
        let mut snapshot = register.state_snapshot();
        snapshot[0] = Complex::zero();
        assert_eq!(register.state_snapshot()[0], Complex::one());
        Ok(())
    }

    #[test]
    fn test_measure_with_seed_is_reproducible() -> Result<()> {
        let run = |seed: u64| -> Result<Vec<u8>> {
            let mut register = QuantumRegister::new(3)?;
            register.h(0)?.h(1)?.h(2)?;
            Ok(register.measure_with(&mut StdRng::seed_from_u64(seed)))
        };
        assert_eq!(run(7)?, run(7)?);
        Ok(())
    }

    #[test]
    fn test_measure_collapses_to_sampled_outcome() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(11);
        let mut register = QuantumRegister::new(2)?;
        register.h(0)?.h(1)?;
        let outcome = register.measure_outcome_with(&mut rng);

        let state = register.state_snapshot();
        for (i, amp) in state.iter().enumerate() {
            if i == outcome.index() {
                assert_eq!(*amp, Complex::one());
            } else {
                assert!(amp.is_zero());
            }
        }
        // A second measurement of a collapsed register is deterministic.
        assert_eq!(register.measure_outcome_with(&mut rng), outcome);
        register.validate(None)?;
        Ok(())
    }
}
