// src/single/gates.rs

//! Gates for the two-level model.

use super::QubitState;
use crate::core::{DEFAULT_NORM_TOLERANCE, FRAC_1_SQRT_2};

/// Swaps `α` and `β`.
pub fn x(state: &mut QubitState) {
    std::mem::swap(&mut state.alpha, &mut state.beta);
}

/// `(α, β) -> ((α + β)/√2, (α - β)/√2)`
pub fn h(state: &mut QubitState) {
    let alpha = (state.alpha + state.beta) * FRAC_1_SQRT_2;
    let beta = (state.alpha - state.beta) * FRAC_1_SQRT_2;
    state.alpha = alpha;
    state.beta = beta;
}

/// Flips `target` when `control` is a definite `|1>`.
///
/// The two-level model has no joint state, so a control in superposition
/// leaves the target untouched. This is not an entangling gate; use
/// [`QuantumRegister::cnot`](crate::QuantumRegister::cnot) for that.
pub fn cnot(control: &QubitState, target: &mut QubitState) {
    if (control.prob1() - 1.0).abs() <= DEFAULT_NORM_TOLERANCE {
        x(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_x_flips_basis() {
        let mut state = QubitState::zero();
        x(&mut state);
        assert_eq!(state, QubitState::one());
    }

    #[test]
    fn test_h_creates_and_undoes_superposition() {
        let mut state = QubitState::zero();
        h(&mut state);
        assert!((state.alpha - Complex::new(FRAC_1_SQRT_2, 0.0)).norm() < TOL);
        assert!((state.beta - Complex::new(FRAC_1_SQRT_2, 0.0)).norm() < TOL);

        h(&mut state);
        assert!((state.prob0() - 1.0).abs() < TOL);
        assert!(state.prob1() < TOL);

        let mut one = QubitState::one();
        h(&mut one);
        assert!((one.beta - Complex::new(-FRAC_1_SQRT_2, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_cnot_requires_definite_control() {
        let mut target = QubitState::zero();
        cnot(&QubitState::zero(), &mut target);
        assert_eq!(target, QubitState::zero());

        cnot(&QubitState::one(), &mut target);
        assert_eq!(target, QubitState::one());

        // H·H returns |1> up to rounding.
        let mut control = QubitState::one();
        h(&mut control);
        h(&mut control);
        cnot(&control, &mut target);
        assert_eq!(target, QubitState::zero());

        // A control in superposition does nothing.
        let mut superposed = QubitState::zero();
        h(&mut superposed);
        cnot(&superposed, &mut target);
        assert_eq!(target, QubitState::zero());
    }
}
