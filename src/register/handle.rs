// src/register/handle.rs

use super::QuantumRegister;
use crate::core::Result;

/// A single qubit of a [`QuantumRegister`], borrowed for chained gate calls.
///
/// The index is checked once when the handle is created, so `h` and `x`
/// cannot fail. The handle holds the register mutably for its lifetime.
///
/// ```
/// use qsim::{QuantumRegister, QsimError};
///
/// # fn main() -> Result<(), QsimError> {
/// let mut register = QuantumRegister::new(2)?;
/// register.qubit(0)?.x().h().x();
/// register.qubit(1)?.h().cnot(0)?;
/// assert!((register.probabilities().iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct QubitRef<'a> {
    register: &'a mut QuantumRegister,
    index: usize,
}

impl<'a> QubitRef<'a> {
    pub(super) fn new(register: &'a mut QuantumRegister, index: usize) -> Self {
        Self { register, index }
    }

    /// The register index this handle addresses.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Applies the Hadamard gate to this qubit.
    pub fn h(&mut self) -> &mut Self {
        self.register.apply_h(self.index);
        self
    }

    /// Applies the Pauli-X gate to this qubit.
    pub fn x(&mut self) -> &mut Self {
        self.register.apply_x(self.index);
        self
    }

    /// CNOT with this qubit as control.
    ///
    /// # Errors
    /// Same as [`QuantumRegister::cnot`].
    pub fn cnot(&mut self, target: usize) -> Result<&mut Self> {
        self.register.cnot(self.index, target)?;
        Ok(self)
    }

    /// Marginal probability that this qubit reads 1.
    pub fn probability_of_one(&self) -> f64 {
        self.register.marginal_one(self.index)
    }
}

#[cfg(test)]
mod tests {
    use crate::QuantumRegister;
    use crate::core::{QsimError, Result};

    #[test]
    fn test_handle_forwards_to_register() -> Result<()> {
        let mut direct = QuantumRegister::new(2)?;
        direct.h(0)?.cnot(0, 1)?.x(1)?;

        let mut via_handle = QuantumRegister::new(2)?;
        via_handle.qubit(0)?.h().cnot(1)?;
        via_handle.qubit(1)?.x();

        assert_eq!(direct.state_snapshot(), via_handle.state_snapshot());
        Ok(())
    }

    #[test]
    fn test_handle_reports_marginal_and_errors() -> Result<()> {
        let mut register = QuantumRegister::new(2)?;
        let mut q1 = register.qubit(1)?;
        assert_eq!(q1.index(), 1);
        assert_eq!(q1.probability_of_one(), 0.0);
        assert_eq!(q1.x().probability_of_one(), 1.0);
        assert!(matches!(q1.cnot(1), Err(QsimError::InvalidOperation { .. })));
        assert!(matches!(q1.cnot(5), Err(QsimError::QubitOutOfRange { index: 5, .. })));
        Ok(())
    }
}
