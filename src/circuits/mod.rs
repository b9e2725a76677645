// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`qsim::operations::Operation`).

use crate::operations::Operation;
use std::collections::BTreeSet;
use std::fmt;

/// Circuits wider than this are summarized instead of drawn wire by wire.
const MAX_DIAGRAM_QUBITS: usize = 64;

/// An ordered sequence of [`Operation`]s over qubits `0..num_qubits()`.
///
/// Analogy: similar to `qiskit.QuantumCircuit`, but kept in memory only.
#[derive(Clone, PartialEq, Eq)]
pub struct Circuit {
    /// Every qubit index named by some operation.
    qubits: BTreeSet<usize>,
    /// The ordered sequence of operations.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: BTreeSet::new(),
            operations: Vec::new(),
        }
    }

    /// Appends an operation and records the qubits it touches.
    pub fn add_operation(&mut self, op: Operation) {
        self.qubits.extend(op.involved_qubits());
        self.operations.push(op);
    }

    /// Appends every operation yielded by `ops`, in order.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// The set of qubit indices named by the circuit's operations.
    pub fn qubits(&self) -> &BTreeSet<usize> {
        &self.qubits
    }

    /// Size of the register needed to run the circuit: highest named index + 1.
    /// Zero when no operation names a qubit. Saturates at `usize::MAX`, a size
    /// no register accepts.
    pub fn num_qubits(&self) -> usize {
        self.qubits.last().map_or(0, |highest| highest.saturating_add(1))
    }

    /// Returns a slice containing the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// `true` if at least one `Measure` appears.
    pub fn has_measurement(&self) -> bool {
        self.operations.iter().any(|op| !op.is_unitary())
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Builds a [`Circuit`] by method chaining.
///
/// ```
/// use qsim::{CircuitBuilder, Operation};
///
/// let bell = CircuitBuilder::new()
///     .h(0)
///     .cnot(0, 1)
///     .measure()
///     .build();
///
/// assert_eq!(bell.num_qubits(), 2);
/// assert_eq!(bell.operations()[1], Operation::ControlledNot { control: 0, target: 1 });
/// ```
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    pub fn h(self, target: usize) -> Self {
        self.add_op(Operation::Hadamard { target })
    }

    pub fn x(self, target: usize) -> Self {
        self.add_op(Operation::PauliX { target })
    }

    pub fn cnot(self, control: usize, target: usize) -> Self {
        self.add_op(Operation::ControlledNot { control, target })
    }

    pub fn measure(self) -> Self {
        self.add_op(Operation::Measure)
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    /// Index validity is checked when the circuit runs.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_qubits = self.num_qubits();
        let num_ops = self.operations.len();
        writeln!(f, "qsim::Circuit[{} operations on {} qubits]", num_ops, num_qubits)?;
        if num_qubits == 0 {
            return Ok(());
        }
        if num_qubits > MAX_DIAGRAM_QUBITS {
            return writeln!(
                f,
                "(diagram omitted: highest qubit index {} exceeds the {}-wire drawing limit)",
                num_qubits - 1,
                MAX_DIAGRAM_QUBITS
            );
        }

        let labels: Vec<String> = (0..num_qubits).map(|q| format!("q{}: ", q)).collect();
        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let label_padding = " ".repeat(label_width);

        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] is the wire segment; v_connect[row][time] the connector below it.
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            let total_dashes = GATE_WIDTH.saturating_sub(slen);
            let pre_dashes = total_dashes / 2;
            let post_dashes = total_dashes - pre_dashes;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre_dashes),
                symbol,
                H_WIRE.to_string().repeat(post_dashes)
            )
        }

        for (t, op) in self.operations.iter().enumerate() {
            match op {
                Operation::Hadamard { target } => op_grid[*target][t] = format_gate("H"),
                Operation::PauliX { target } => op_grid[*target][t] = format_gate("X"),
                Operation::ControlledNot { control, target } => {
                    op_grid[*control][t] = format_gate("@");
                    op_grid[*target][t] = format_gate("X");
                    let r_min = (*control).min(*target);
                    let r_max = (*control).max(*target);
                    for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                        row_vec[t] = V_WIRE;
                    }
                }
                Operation::Measure => {
                    for row in op_grid.iter_mut() {
                        row[t] = format_gate("M");
                    }
                }
            }
        }

        for r in 0..num_qubits {
            write!(f, "{:<width$}", labels[r], width = label_width)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let padding_needed = GATE_WIDTH - 1;
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), v_connect[r][t], " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
