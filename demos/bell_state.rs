//! Prepares a Bell pair, prints its amplitudes and probabilities, then
//! measures fresh pairs to show the 00/11 correlation.
//!
//! Run with `RUST_LOG=debug cargo run --example bell_state` to see each collapse.

use qsim::{QsimError, QuantumRegister};

const TRIALS: usize = 1000;

fn main() -> Result<(), QsimError> {
    env_logger::init();
    println!("--- qsim Example: Bell State ---");

    let mut register = QuantumRegister::new(2)?;
    register.h(0)?.cnot(0, 1)?;

    println!("\nState after H(0), CNOT(0, 1): {}", register.state());
    for (index, p) in register.probabilities().iter().enumerate() {
        println!("  P(|{:02b}>) = {:.4}", index, p);
    }

    let mut both_one = 0;
    for _ in 0..TRIALS {
        let mut pair = QuantumRegister::new(2)?;
        pair.h(0)?.cnot(0, 1)?;
        let bits = pair.measure();
        if bits[0] != bits[1] {
            return Err(QsimError::incoherence(format!("Uncorrelated Bell measurement: {:?}", bits)));
        }
        if bits[0] == 1 {
            both_one += 1;
        }
    }

    println!("\n{} trials: |11> observed {} times ({:.3}), |00> {} times", TRIALS, both_one, both_one as f64 / TRIALS as f64, TRIALS - both_one);
    Ok(())
}
