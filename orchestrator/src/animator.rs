//! Highlight sets for the forward-pass animation.
//!
//! The animation loop itself lives on the run controller (it needs the
//! controls, the parameter snapshot and the event channel); this module
//! holds the visual contract of a single step.

/// How a neuron is marked during one animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// The neuron currently being evaluated.
    Active,
    /// A direct input feeding the active neuron.
    Input,
}

/// One marked neuron of the transient highlight set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub layer: usize,
    pub index: usize,
    pub kind: HighlightKind,
}

/// The highlight set for evaluating neuron `index` of `layer`: that
/// neuron `Active` plus every neuron of the immediately preceding layer
/// `Input`. The contract is "this neuron and its direct inputs", not the
/// full upstream path.
pub fn highlight_set(widths: &[usize], layer: usize, index: usize) -> Vec<Highlight> {
    let prev_width = layer
        .checked_sub(1)
        .and_then(|l| widths.get(l))
        .copied()
        .unwrap_or(0);

    let mut set = Vec::with_capacity(1 + prev_width);
    set.push(Highlight {
        layer,
        index,
        kind: HighlightKind::Active,
    });
    for k in 0..prev_width {
        set.push(Highlight {
            layer: layer - 1,
            index: k,
            kind: HighlightKind::Input,
        });
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_active_plus_previous_layer_inputs() {
        let set = highlight_set(&[1, 2, 1], 2, 0);

        assert_eq!(set.len(), 3);
        assert_eq!(
            set[0],
            Highlight { layer: 2, index: 0, kind: HighlightKind::Active }
        );
        for (k, h) in set[1..].iter().enumerate() {
            assert_eq!(*h, Highlight { layer: 1, index: k, kind: HighlightKind::Input });
        }
    }

    #[test]
    fn hidden_layer_step_marks_the_input_neuron() {
        let set = highlight_set(&[1, 2, 1], 1, 1);
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].kind, HighlightKind::Active);
        assert_eq!(set[1], Highlight { layer: 0, index: 0, kind: HighlightKind::Input });
    }
}
