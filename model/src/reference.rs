//! Local reference trainer: one plain gradient-descent sweep over the
//! sample set, sigmoid activations throughout, squared-error loss.
//!
//! This backs the offline training service so the visualizer runs without
//! the remote optimizer. It does not compute the physics-loss term; the
//! remote service remains the primary flow.

use crate::{evaluator::sigmoid, params::ParamSnapshot, topology::Topology};

/// Result of one local training sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub params: ParamSnapshot,
    pub loss: f32,
    pub prediction: f32,
    pub target: f32,
}

/// Runs one stochastic gradient-descent sweep: forward/backward per
/// sample, in-place updates, samples visited in order.
///
/// Starts from an all-zero snapshot when `params` is still empty. The
/// reported loss is the mean squared error of the first output neuron
/// across samples; the prediction is a forward pass of the first sample
/// with the updated parameters.
pub fn gradient_step(
    topology: &Topology,
    params: &ParamSnapshot,
    inputs: &[Vec<f32>],
    targets: &[Vec<f32>],
    learning_rate: f32,
) -> StepOutcome {
    let mut next = if params.is_empty() {
        ParamSnapshot::zeroed(topology)
    } else {
        params.clone()
    };

    let widths = topology.widths().to_vec();
    let transitions = topology.transitions();
    let mut loss_sum = 0.0f32;

    for (sample, input) in inputs.iter().enumerate() {
        let target = targets.get(sample).cloned().unwrap_or_default();
        let acts = forward(&widths, input, &next);

        let output = acts
            .last()
            .and_then(|layer| layer.first())
            .copied()
            .unwrap_or(0.0);
        let wanted = target.first().copied().unwrap_or(0.0);
        loss_sum += (output - wanted) * (output - wanted);

        // Deltas per transition, output layer first.
        let mut deltas: Vec<Vec<f32>> = vec![Vec::new(); transitions];
        if transitions == 0 {
            continue;
        }

        let last = transitions - 1;
        deltas[last] = (0..widths[last + 1])
            .map(|j| {
                let a = acts[last + 1][j];
                let t = target.get(j).copied().unwrap_or(0.0);
                (a - t) * a * (1.0 - a)
            })
            .collect();

        for l in (0..last).rev() {
            deltas[l] = (0..widths[l + 1])
                .map(|j| {
                    let downstream: f32 = (0..widths[l + 2])
                        .map(|k| deltas[l + 1][k] * next.weight(l + 1, j, k))
                        .sum();
                    let a = acts[l + 1][j];
                    downstream * a * (1.0 - a)
                })
                .collect();
        }

        for l in 0..transitions {
            for i in 0..widths[l] {
                for j in 0..widths[l + 1] {
                    next.weights[l][i][j] -= learning_rate * deltas[l][j] * acts[l][i];
                }
            }
            for j in 0..widths[l + 1] {
                next.biases[l][0][j] -= learning_rate * deltas[l][j];
            }
        }
    }

    let samples = inputs.len().max(1) as f32;
    let first_input = inputs.first().cloned().unwrap_or_default();
    let prediction = forward(&widths, &first_input, &next)
        .last()
        .and_then(|layer| layer.first())
        .copied()
        .unwrap_or(0.0);
    let target = targets
        .first()
        .and_then(|t| t.first())
        .copied()
        .unwrap_or(0.0);

    StepOutcome {
        params: next,
        loss: loss_sum / samples,
        prediction,
        target,
    }
}

fn forward(widths: &[usize], input: &[f32], params: &ParamSnapshot) -> Vec<Vec<f32>> {
    let mut acts: Vec<Vec<f32>> = Vec::with_capacity(widths.len());
    acts.push(input.to_vec());
    for l in 0..widths.len().saturating_sub(1) {
        let prev = acts[l].clone();
        let layer = (0..widths[l + 1])
            .map(|j| {
                let z: f32 = prev
                    .iter()
                    .enumerate()
                    .map(|(k, &a)| a * params.weight(l, k, j))
                    .sum::<f32>()
                    + params.bias(l, j);
                sigmoid(z)
            })
            .collect();
        acts.push(layer);
    }
    acts
}
