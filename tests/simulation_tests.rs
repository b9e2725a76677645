// tests/simulation_tests.rs

use qsim::{
    Circuit, CircuitBuilder, Operation, QsimError, Qubit, QubitState, SimulationResult, Simulator, SimulatorConfig,
    single::gates,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_simulator(shots: usize, seed: u64) -> Simulator {
    Simulator::with_config(SimulatorConfig {
        shots,
        seed: Some(seed),
        ..Default::default()
    })
    .expect("valid simulator config")
}

// Helper to check that only the listed outcomes were observed
fn check_support(result: &SimulationResult, allowed: &[usize]) {
    for (index, count) in result.counts() {
        assert!(
            allowed.contains(index),
            "Outcome |{}> observed {} times but should be impossible",
            result.bitstring(*index),
            count
        );
    }
}

#[test]
fn test_empty_circuit() -> Result<(), QsimError> {
    let result = Simulator::new().run(&Circuit::new())?;
    assert!(result.counts().is_empty(), "Empty circuit should yield empty results");
    Ok(())
}

#[test]
fn test_initial_state_measurement() -> Result<(), QsimError> {
    let circuit = CircuitBuilder::new().add_op(Operation::PauliX { target: 1 }).add_op(Operation::PauliX { target: 1 }).measure().build();
    let result = seeded_simulator(64, 1).run(&circuit)?;
    assert_eq!(result.num_qubits(), 2);
    assert_eq!(result.count(0), 64);
    Ok(())
}

#[test]
fn test_bell_histogram() -> Result<(), QsimError> {
    let circuit = CircuitBuilder::new().h(0).cnot(0, 1).measure().build();
    let result = seeded_simulator(1000, 17).run(&circuit)?;

    assert_eq!(result.shots(), 1000);
    check_support(&result, &[0b00, 0b11]);
    assert!((result.frequency(0b11) - 0.5).abs() < 0.1);
    Ok(())
}

#[test]
fn test_ghz_histogram_with_step_validation() -> Result<(), QsimError> {
    let circuit = CircuitBuilder::new().h(0).cnot(0, 1).cnot(1, 2).build();
    let simulator = Simulator::with_config(SimulatorConfig {
        shots: 800,
        seed: Some(3),
        validate_each_step: true,
        norm_tolerance: 1e-12,
    })?;
    let result = simulator.run(&circuit)?;

    check_support(&result, &[0b000, 0b111]);
    assert_eq!(result.count(0b000) + result.count(0b111), 800);
    assert!((result.frequency(0b111) - 0.5).abs() < 0.1);
    Ok(())
}

#[test]
fn test_uniform_superposition_covers_all_outcomes() -> Result<(), QsimError> {
    let circuit = CircuitBuilder::new().add_ops((0..3).map(|target| Operation::Hadamard { target })).build();
    let result = seeded_simulator(4000, 8).run(&circuit)?;
    assert_eq!(result.counts().len(), 8);
    for index in 0..8 {
        assert!((result.frequency(index) - 0.125).abs() < 0.05, "outcome {} frequency {}", index, result.frequency(index));
    }
    Ok(())
}

#[test]
fn test_mid_circuit_measurement_collapses_before_later_gates() -> Result<(), QsimError> {
    // Without the first collapse H·H would return qubit 0 to |0> every shot.
    let circuit = CircuitBuilder::new().h(0).measure().h(0).measure().build();
    let result = seeded_simulator(1000, 21).run(&circuit)?;
    check_support(&result, &[0, 1]);
    assert!((result.frequency(1) - 0.5).abs() < 0.1, "|1> frequency {}", result.frequency(1));
    Ok(())
}

#[test]
fn test_degenerate_cnot_in_circuit() {
    let circuit = CircuitBuilder::new().cnot(2, 2).build();
    match Simulator::new().run(&circuit) {
        Err(QsimError::InvalidOperation { message }) => {
            assert!(message.contains("cannot be the same"), "Incorrect error message: {}", message);
        }
        other => panic!("Expected InvalidOperation error, got {:?}", other),
    }
}

#[test]
fn test_single_qubit_model_matches_register_for_isolated_gates() -> Result<(), QsimError> {
    let mut qubit = Qubit::new();
    qubit.apply_h().apply_x();

    let register = {
        let mut r = qsim::QuantumRegister::new(1)?;
        r.h(0)?.x(0)?;
        r
    };
    let amplitudes = register.state_snapshot();
    assert!((qubit.state().alpha - amplitudes[0]).norm() < 1e-12);
    assert!((qubit.state().beta - amplitudes[1]).norm() < 1e-12);
    Ok(())
}

#[test]
fn test_single_qubit_classical_cnot() -> Result<(), QsimError> {
    let mut rng = StdRng::seed_from_u64(12);
    let mut control = Qubit::new();
    let mut target = Qubit::new();

    target.apply_cnot(&control);
    assert!(!target.measure_with(&mut rng));

    control.apply_x();
    target.apply_cnot(&control);
    assert!(target.measure_with(&mut rng));

    let mut state = QubitState::one();
    gates::x(&mut state);
    assert_eq!(state, QubitState::zero());
    Ok(())
}
