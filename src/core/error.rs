//! Error handling logic

use thiserror::Error;

/// Result type alias for register and simulation operations.
pub type Result<T> = std::result::Result<T, QsimError>;

/// Failures surfaced by the register, the two-level model and the simulator.
/// Every operation is a pure computation, so errors are reported immediately
/// and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QsimError {
    /// A register cannot be built with the requested qubit count.
    #[error("Invalid Register: {message}")]
    InvalidRegister {
        /// InvalidRegister failure message
        message: String,
    },

    /// A gate or handle referenced a qubit the register does not have.
    #[error("Qubit index {index} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending index
        index: usize,
        /// Size of the register that rejected it
        num_qubits: usize,
    },

    /// Gate arguments that have no physical meaning (e.g. CNOT with control == target).
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// The amplitudes no longer satisfy the normalization invariant.
    #[error("Incoherence Violation: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// Simulator configuration that cannot be honoured.
    #[error("Invalid Configuration: {message}")]
    InvalidConfig {
        /// InvalidConfig failure message
        message: String,
    },
}

impl QsimError {
    /// Create an out-of-range error for `index` on a register of `num_qubits`.
    pub fn out_of_range(index: usize, num_qubits: usize) -> Self {
        Self::QubitOutOfRange { index, num_qubits }
    }

    /// Create an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation { message: message.into() }
    }

    /// Create an incoherence error.
    pub fn incoherence(message: impl Into<String>) -> Self {
        Self::Incoherence { message: message.into() }
    }
}
