// src/simulation/mod.rs

//! Runs `qsim::circuits::Circuit`s on fresh registers and collects
//! measurement histograms.

mod config;
mod results;
pub(crate) mod engine;

pub use config::SimulatorConfig;
pub use results::SimulationResult;

use crate::circuits::Circuit;
use crate::core::Result;
use crate::register::QuantumRegister;
use engine::SimulationEngine;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Executes circuits shot by shot.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// * `QsimError::InvalidConfig` if `config` does not validate.
    pub fn with_config(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `circuit` `shots` times, each on a fresh `|0...0>` register.
    ///
    /// Each `Measure` collapses the whole register; the last outcome of a shot
    /// is the one counted. A circuit with no `Measure` is measured once after
    /// its final gate.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with one recorded outcome per shot (empty for
    ///   an empty circuit).
    /// * `Err(QsimError)` on the first invalid gate (out-of-range index,
    ///   CNOT with control == target) or a failed per-step validation.
    ///   A circuit naming a qubit index too large for any register fails with
    ///   `QsimError::InvalidRegister` before the first shot.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        if circuit.is_empty() {
            return Ok(SimulationResult::new(0));
        }

        let num_qubits = circuit.num_qubits().max(1);
        let mut rng = self.rng();
        let mut result = SimulationResult::new(num_qubits);
        info!(
            "Running {} shots of a {}-operation circuit on {} qubits",
            self.config.shots,
            circuit.len(),
            num_qubits
        );

        for shot in 0..self.config.shots {
            let mut engine = SimulationEngine::init(num_qubits, self.step_tolerance())?;
            for op in circuit.operations() {
                engine.apply_operation(op, &mut rng)?;
            }
            let outcome = engine.finish(&mut rng);
            debug!("Shot {} -> {}", shot, outcome);
            result.record_outcome(outcome.index());
        }

        Ok(result)
    }

    /// Applies the circuit's gates once, skipping `Measure`, and returns the
    /// register so its amplitudes can be inspected.
    pub fn run_state(&self, circuit: &Circuit) -> Result<QuantumRegister> {
        let mut rng = self.rng();
        let mut engine = SimulationEngine::init(circuit.num_qubits().max(1), self.step_tolerance())?;
        for op in circuit.operations().iter().filter(|op| op.is_unitary()) {
            engine.apply_operation(op, &mut rng)?;
        }
        Ok(engine.into_register())
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    fn step_tolerance(&self) -> Option<f64> {
        self.config.validate_each_step.then_some(self.config.norm_tolerance)
    }
}
