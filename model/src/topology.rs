/// Ordered layer widths of a feedforward network:
/// `[input, hidden × N, output]`.
///
/// Derived once from user configuration and immutable for the lifetime of
/// a run; changing it requires a full reset so that animation indices and
/// layout coordinates stay valid mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    widths: Vec<usize>,
}

impl Topology {
    /// Builds `[input_width, neurons_per_layer × hidden_layers, output_width]`.
    pub fn new(
        input_width: usize,
        hidden_layers: usize,
        neurons_per_layer: usize,
        output_width: usize,
    ) -> Self {
        let mut widths = Vec::with_capacity(hidden_layers + 2);
        widths.push(input_width);
        widths.extend(std::iter::repeat(neurons_per_layer).take(hidden_layers));
        widths.push(output_width);
        Self { widths }
    }

    pub fn from_widths(widths: Vec<usize>) -> Self {
        Self { widths }
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Total layer count, input and output included.
    pub fn layers(&self) -> usize {
        self.widths.len()
    }

    /// Number of layer transitions, i.e. weight matrices.
    pub fn transitions(&self) -> usize {
        self.widths.len().saturating_sub(1)
    }

    /// Width of `layer`; zero for out-of-range indices.
    pub fn width(&self, layer: usize) -> usize {
        self.widths.get(layer).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_input_hidden_output() {
        let t = Topology::new(1, 2, 4, 1);
        assert_eq!(t.widths(), &[1, 4, 4, 1]);
        assert_eq!(t.layers(), 4);
        assert_eq!(t.transitions(), 3);
    }

    #[test]
    fn width_is_zero_out_of_range() {
        let t = Topology::new(1, 1, 3, 1);
        assert_eq!(t.width(1), 3);
        assert_eq!(t.width(9), 0);
    }
}
