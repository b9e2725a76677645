// src/simulation/results.rs
use std::collections::BTreeMap;
use std::fmt;

/// Histogram of measured basis indices over a batch of shots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    num_qubits: usize,
    shots: usize,
    /// Basis index -> number of shots that ended there.
    counts: BTreeMap<usize, usize>,
}

impl SimulationResult {
    /// Creates a new, empty result set. (Internal visibility)
    pub(crate) fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            shots: 0,
            counts: BTreeMap::new(),
        }
    }

    /// Records one shot that collapsed to `index`. (Internal visibility)
    pub(crate) fn record_outcome(&mut self, index: usize) {
        *self.counts.entry(index).or_insert(0) += 1;
        self.shots += 1;
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of shots recorded.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// All observed outcomes in increasing index order. Outcomes never
    /// observed are absent.
    pub fn counts(&self) -> &BTreeMap<usize, usize> {
        &self.counts
    }

    /// How many shots ended in basis index `index`.
    pub fn count(&self, index: usize) -> usize {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Fraction of shots that ended in `index`; 0.0 for an empty result.
    pub fn frequency(&self, index: usize) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.count(index) as f64 / self.shots as f64
        }
    }

    /// The most often observed index (lowest index wins ties).
    pub fn most_frequent(&self) -> Option<usize> {
        self.counts
            .iter()
            .max_by(|(ia, ca), (ib, cb)| ca.cmp(cb).then(ib.cmp(ia)))
            .map(|(index, _)| *index)
    }

    /// `index` written as a bitstring, highest qubit first.
    pub fn bitstring(&self, index: usize) -> String {
        (0..self.num_qubits)
            .rev()
            .map(|b| if (index >> b) & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            writeln!(f, "  No outcomes were recorded.")?;
        } else {
            for (index, count) in &self.counts {
                writeln!(
                    f,
                    "    |{}>: {} ({:.3})",
                    self.bitstring(*index),
                    count,
                    self.frequency(*index)
                )?;
            }
        }
        Ok(())
    }
}
