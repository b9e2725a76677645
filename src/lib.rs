// src/lib.rs

//! `qsim` - dense state-vector simulation of small quantum registers
//!
//! A [`QuantumRegister`] of `n` qubits stores all `2^n` complex amplitudes of
//! the joint state. Hadamard, Pauli-X and CNOT gates are applied by
//! bit-indexed kernels, probabilities follow the Born rule, and measurement
//! samples one basis state and collapses the register onto it.
//!
//! Basis index `i` encodes qubit `b` in bit `b` of `i`, so `|q1 q0> = |10>` is
//! index 2. Gate kernels, probability readout and measurement all use this
//! convention.

pub mod core;
pub mod register;
pub mod single;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{MeasurementOutcome, QsimError, Result, StateVector};
pub use register::{QuantumRegister, QubitRef};
pub use single::{Qubit, QubitState};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{SimulationResult, Simulator, SimulatorConfig};
pub use validation::{check_collapsed, check_normalization};

// Example 1: Bell pair
// H on qubit 0 then CNOT(0 -> 1) entangles the two qubits; every
// measurement reads 00 or 11.
/// ```
/// use qsim::{QuantumRegister, QsimError};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// # fn main() -> Result<(), QsimError> {
/// let mut rng = StdRng::seed_from_u64(42);
/// for _ in 0..100 {
///     let mut register = QuantumRegister::new(2)?;
///     register.h(0)?.cnot(0, 1)?;
///     let bits = register.measure_with(&mut rng);
///     assert_eq!(bits[0], bits[1], "Bell pair qubits must agree");
/// }
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Shot histogram
// Runs a three-qubit GHZ circuit through the simulator; only 000 and 111
// are ever observed.
/// ```
/// use qsim::{CircuitBuilder, Simulator, SimulatorConfig, QsimError};
///
/// # fn main() -> Result<(), QsimError> {
/// let ghz = CircuitBuilder::new().h(0).cnot(0, 1).cnot(1, 2).measure().build();
/// let simulator = Simulator::with_config(SimulatorConfig {
///     shots: 500,
///     seed: Some(7),
///     ..Default::default()
/// })?;
/// let result = simulator.run(&ghz)?;
/// assert_eq!(result.count(0b000) + result.count(0b111), 500);
/// println!("{}", result);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = ();
