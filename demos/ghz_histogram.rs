//! Builds a three-qubit GHZ circuit, draws it, and prints a shot histogram.

use qsim::{CircuitBuilder, QsimError, Simulator, SimulatorConfig};

fn main() -> Result<(), QsimError> {
    env_logger::init();
    println!("--- qsim Example: GHZ Histogram ---");

    let circuit = CircuitBuilder::new()
        .h(0)
        .cnot(0, 1)
        .cnot(1, 2)
        .measure()
        .build();
    println!("\nCircuit Definition:\n{}", circuit);

    let simulator = Simulator::with_config(SimulatorConfig {
        shots: 2000,
        seed: Some(2024),
        validate_each_step: true,
        ..Default::default()
    })?;

    let final_state = simulator.run_state(&circuit)?;
    println!("Pre-measurement state: {}", final_state.state());

    let result = simulator.run(&circuit)?;
    println!("\n{}", result);
    if let Some(index) = result.most_frequent() {
        println!("Most frequent outcome: |{}>", result.bitstring(index));
    }
    Ok(())
}
