use serde::{Deserialize, Serialize};

use crate::topology::Topology;

/// Weights and biases in the training service's wire shape: per layer
/// transition `l`, `weights[l][from][to]` and a 1×width bias row
/// `biases[l][0][to]`.
///
/// Exclusively owned and replaced wholesale by the run controller after
/// each remote step; everything else reads it through the safe accessors
/// below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSnapshot {
    #[serde(default)]
    pub weights: Vec<Vec<Vec<f32>>>,
    #[serde(default)]
    pub biases: Vec<Vec<Vec<f32>>>,
}

impl ParamSnapshot {
    /// All-zero matrices and vectors sized to `topology`.
    pub fn zeroed(topology: &Topology) -> Self {
        let widths = topology.widths();
        let mut weights = Vec::with_capacity(topology.transitions());
        let mut biases = Vec::with_capacity(topology.transitions());
        for l in 0..topology.transitions() {
            weights.push(vec![vec![0.0; widths[l + 1]]; widths[l]]);
            biases.push(vec![vec![0.0; widths[l + 1]]]);
        }
        Self { weights, biases }
    }

    /// True until a first snapshot has been installed.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty() && self.biases.is_empty()
    }

    /// Weight from neuron `from` in layer `l` to neuron `to` in layer
    /// `l + 1`. Missing or undersized rows read as zero: partially
    /// initialized snapshots occur transiently during reset and must not
    /// raise.
    pub fn weight(&self, l: usize, from: usize, to: usize) -> f32 {
        self.weights
            .get(l)
            .and_then(|m| m.get(from))
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Bias of neuron `to` in layer `l + 1`, with the same zero-fill
    /// policy as [`ParamSnapshot::weight`].
    pub fn bias(&self, l: usize, to: usize) -> f32 {
        self.biases
            .get(l)
            .and_then(|m| m.first())
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_matches_topology_shape() {
        let t = Topology::new(1, 1, 3, 1);
        let p = ParamSnapshot::zeroed(&t);

        assert_eq!(p.weights.len(), 2);
        assert_eq!(p.weights[0].len(), 1);
        assert_eq!(p.weights[0][0].len(), 3);
        assert_eq!(p.weights[1].len(), 3);
        assert_eq!(p.weights[1][0].len(), 1);

        assert_eq!(p.biases[0].len(), 1);
        assert_eq!(p.biases[0][0].len(), 3);
        assert!(!p.is_empty());
    }

    #[test]
    fn missing_entries_read_as_zero() {
        let p = ParamSnapshot::default();
        assert!(p.is_empty());
        assert_eq!(p.weight(0, 0, 0), 0.0);
        assert_eq!(p.bias(3, 7), 0.0);

        let t = Topology::new(1, 1, 2, 1);
        let p = ParamSnapshot::zeroed(&t);
        assert_eq!(p.weight(0, 0, 5), 0.0);
        assert_eq!(p.weight(9, 0, 0), 0.0);
    }

    #[test]
    fn wire_shape_roundtrips_through_json() {
        let t = Topology::new(1, 1, 2, 1);
        let mut p = ParamSnapshot::zeroed(&t);
        p.weights[0][0][1] = 0.25;
        p.biases[1][0][0] = -1.5;

        let json = serde_json::to_string(&p).unwrap();
        let back: ParamSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
