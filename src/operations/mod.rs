// src/operations/mod.rs

//! Defines the operations a circuit can apply to a register.

use std::fmt;

/// A single step of a circuit.
///
/// Qubits are addressed by their register index. Gate operations map one to
/// one onto [`QuantumRegister`](crate::QuantumRegister) mutators; `Measure`
/// collapses the whole register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Hadamard gate.
    Hadamard {
        /// The qubit put into (or taken out of) superposition.
        target: usize,
    },

    /// Pauli-X (NOT) gate.
    PauliX {
        /// The qubit whose value is flipped.
        target: usize,
    },

    /// Controlled-X. Flips `target` in every basis state where `control` is 1.
    ControlledNot {
        /// The qubit whose value decides whether the target flips.
        control: usize,
        /// The qubit that is flipped.
        target: usize,
    },

    /// Collapses the whole register and records the classical outcome.
    Measure,
}

impl Operation {
    /// Returns the qubit indices named by the operation. `Measure` names none
    /// because it acts on every qubit of whatever register runs it.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Operation::Hadamard { target } => vec![*target],
            Operation::PauliX { target } => vec![*target],
            Operation::ControlledNot { control, target } => vec![*control, *target],
            Operation::Measure => Vec::new(),
        }
    }

    /// `true` for the unitary gates, `false` for `Measure`.
    pub fn is_unitary(&self) -> bool {
        !matches!(self, Operation::Measure)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Hadamard { target } => write!(f, "H({})", target),
            Operation::PauliX { target } => write!(f, "X({})", target),
            Operation::ControlledNot { control, target } => write!(f, "CNOT({}, {})", control, target),
            Operation::Measure => write!(f, "MEASURE"),
        }
    }
}
