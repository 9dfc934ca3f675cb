use crate::{params::ParamSnapshot, topology::Topology};

/// Trace placeholder published when no neuron matches the focus, and
/// after an animation pass clears the console.
pub const NO_CALCULATIONS: &str = "No calculations.";

/// The single neuron a calculation trace is produced for. `layer` is
/// 1-based over the full layer list (layer 0 is the input layer and has
/// no calculation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub layer: usize,
    pub neuron: usize,
}

impl Focus {
    /// First neuron of the first hidden layer, the default when no focus
    /// is given.
    pub const DEFAULT: Focus = Focus { layer: 1, neuron: 0 };
}

/// A full forward pass: activations for every layer (input included) and
/// the calculation trace of the focused neuron.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub activations: Vec<Vec<f32>>,
    pub trace: Vec<String>,
}

pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Computes activations layer by layer: `z = Σ_k prev[k]·w[k][j] + b[j]`,
/// `a = sigmoid(z)`.
///
/// The trace records the literal summation string and sigmoid
/// substitution for the focused neuron (weights and activations to two
/// decimals inside the sum, intermediate values to four). An out-of-range
/// focus yields the [`NO_CALCULATIONS`] placeholder; an omitted focus
/// falls back to [`Focus::DEFAULT`].
///
/// Inputs are never mutated and missing parameter entries read as zero
/// through the snapshot accessors, so transiently partial snapshots
/// evaluate instead of raising.
pub fn evaluate(
    topology: &Topology,
    input: &[f32],
    params: &ParamSnapshot,
    focus: Option<Focus>,
) -> Evaluation {
    let focus = focus.unwrap_or(Focus::DEFAULT);
    let widths = topology.widths();

    let mut activations: Vec<Vec<f32>> = Vec::with_capacity(widths.len());
    activations.push(input.to_vec());
    let mut trace: Vec<String> = Vec::new();

    for l in 0..topology.transitions() {
        let prev = activations[l].clone();
        let width = widths[l + 1];
        let mut out = Vec::with_capacity(width);

        for j in 0..width {
            let mut weighted_sum = 0.0f32;
            let mut sum_str = String::new();
            for (k, &a) in prev.iter().enumerate() {
                let w = params.weight(l, k, j);
                weighted_sum += a * w;
                if k > 0 {
                    sum_str.push_str(" + ");
                }
                sum_str.push_str(&format!("{a:.2}×{w:.2}"));
            }

            let bias = params.bias(l, j);
            let z = weighted_sum + bias;
            let a = sigmoid(z);
            out.push(a);

            if focus.layer == l + 1 && focus.neuron == j {
                trace = vec![
                    format!("z = {sum_str} + b = {weighted_sum:.4} + {bias:.4} = {z:.4}"),
                    format!("a = sigmoid(z) = 1 / (1 + exp(-{z:.4})) = {a:.4}"),
                ];
            }
        }

        activations.push(out);
    }

    if trace.is_empty() {
        trace.push(NO_CALCULATIONS.to_string());
    }

    Evaluation { activations, trace }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topo() -> Topology {
        Topology::new(1, 1, 1, 1)
    }

    #[test]
    fn zero_params_give_half_activation_everywhere() {
        let t = Topology::new(1, 2, 3, 1);
        let eval = evaluate(&t, &[0.0], &ParamSnapshot::zeroed(&t), None);

        assert_eq!(eval.activations.len(), 4);
        for layer in eval.activations.iter().skip(1) {
            for &a in layer {
                assert!((a - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn empty_snapshot_evaluates_like_zeroed() {
        let t = Topology::new(1, 1, 2, 1);
        let zeroed = evaluate(&t, &[0.0], &ParamSnapshot::zeroed(&t), None);
        let empty = evaluate(&t, &[0.0], &ParamSnapshot::default(), None);
        assert_eq!(zeroed.activations, empty.activations);
    }

    #[test]
    fn focused_trace_shows_sum_and_sigmoid() {
        let t = topo();
        let mut p = ParamSnapshot::zeroed(&t);
        p.weights[0][0][0] = 2.0;
        p.biases[0][0][0] = 1.0;

        let eval = evaluate(&t, &[3.0], &p, Some(Focus { layer: 1, neuron: 0 }));

        assert_eq!(
            eval.trace[0],
            "z = 3.00×2.00 + b = 6.0000 + 1.0000 = 7.0000"
        );
        assert_eq!(
            eval.trace[1],
            "a = sigmoid(z) = 1 / (1 + exp(-7.0000)) = 0.9991"
        );
        assert!((eval.activations[1][0] - 0.9991).abs() < 1e-4);
    }

    #[test]
    fn default_focus_is_first_hidden_neuron() {
        let t = topo();
        let mut p = ParamSnapshot::zeroed(&t);
        p.weights[0][0][0] = 2.0;
        p.biases[0][0][0] = 1.0;

        let unfocused = evaluate(&t, &[3.0], &p, None);
        let focused = evaluate(&t, &[3.0], &p, Some(Focus::DEFAULT));
        assert_eq!(unfocused.trace, focused.trace);
    }

    #[test]
    fn out_of_range_focus_yields_placeholder() {
        let t = topo();
        let eval = evaluate(
            &t,
            &[1.0],
            &ParamSnapshot::zeroed(&t),
            Some(Focus { layer: 7, neuron: 0 }),
        );
        assert_eq!(eval.trace, vec![NO_CALCULATIONS.to_string()]);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let t = topo();
        let input = [0.25];
        let p = ParamSnapshot::zeroed(&t);
        let before = p.clone();
        let _ = evaluate(&t, &input, &p, None);
        assert_eq!(p, before);
        assert_eq!(input, [0.25]);
    }
}
