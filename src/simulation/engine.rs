// src/simulation/engine.rs
use crate::core::{MeasurementOutcome, Result};
use crate::operations::Operation;
use crate::register::QuantumRegister;
use rand::Rng;

/// Runs one shot of a circuit against a register it owns.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    register: QuantumRegister,
    /// Outcome of the most recent `Measure`, if any has run.
    last_outcome: Option<MeasurementOutcome>,
    /// Normalization tolerance checked after each gate, when enabled.
    step_tolerance: Option<f64>,
}

impl SimulationEngine {
    /// Starts a shot from `|0...0>` on `num_qubits` qubits.
    pub(crate) fn init(num_qubits: usize, step_tolerance: Option<f64>) -> Result<Self> {
        Ok(Self {
            register: QuantumRegister::new(num_qubits)?,
            last_outcome: None,
            step_tolerance,
        })
    }

    /// Applies one operation. `Measure` collapses the register using `rng`.
    pub(crate) fn apply_operation<R: Rng + ?Sized>(&mut self, op: &Operation, rng: &mut R) -> Result<()> {
        match *op {
            Operation::Hadamard { target } => {
                self.register.h(target)?;
            }
            Operation::PauliX { target } => {
                self.register.x(target)?;
            }
            Operation::ControlledNot { control, target } => {
                self.register.cnot(control, target)?;
            }
            Operation::Measure => {
                self.last_outcome = Some(self.register.measure_outcome_with(rng));
                return Ok(());
            }
        }
        if let Some(tolerance) = self.step_tolerance {
            self.register.validate(Some(tolerance))?;
        }
        Ok(())
    }

    /// Measures now unless a `Measure` already ran, and returns the final outcome.
    pub(crate) fn finish<R: Rng + ?Sized>(mut self, rng: &mut R) -> MeasurementOutcome {
        match self.last_outcome.take() {
            Some(outcome) => outcome,
            None => self.register.measure_outcome_with(rng),
        }
    }

    pub(crate) fn into_register(self) -> QuantumRegister {
        self.register
    }
}
