/// A neuron's position on the diagram canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Evenly spaces layers across the canvas width and neurons down the
/// canvas height: layer `i` sits at `(i+1) * width / (layers+1)`, neuron
/// `j` within it at `(j+1) * height / (count+1)`.
///
/// Pure function of its inputs; width-0 layers yield empty rows. Both the
/// diagram renderer and the animator rely on the result being stable for
/// a fixed topology.
pub fn compute_layout(layer_widths: &[usize], canvas_width: f32, canvas_height: f32) -> Vec<Vec<Point>> {
    let layer_spacing = canvas_width / (layer_widths.len() as f32 + 1.0);

    layer_widths
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let vertical_spacing = canvas_height / (count as f32 + 1.0);
            (0..count)
                .map(|j| Point {
                    x: (i as f32 + 1.0) * layer_spacing,
                    y: (j as f32 + 1.0) * vertical_spacing,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_coordinate_per_neuron() {
        let widths = [1, 4, 4, 1];
        let layout = compute_layout(&widths, 600.0, 350.0);

        assert_eq!(layout.len(), widths.len());
        for (layer, &count) in layout.iter().zip(widths.iter()) {
            assert_eq!(layer.len(), count);
        }
    }

    #[test]
    fn layer_x_strictly_increases() {
        let layout = compute_layout(&[1, 3, 2, 1], 520.0, 350.0);
        for pair in layout.windows(2) {
            assert!(pair[0][0].x < pair[1][0].x);
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let a = compute_layout(&[1, 2, 1], 600.0, 350.0);
        let b = compute_layout(&[1, 2, 1], 600.0, 350.0);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_layer_is_valid() {
        let layout = compute_layout(&[1, 0, 1], 600.0, 350.0);
        assert!(layout[1].is_empty());
    }

    #[test]
    fn positions_match_spacing_formula() {
        let layout = compute_layout(&[1, 2], 300.0, 150.0);
        // two layers: spacing 100 across, neuron rows split the height
        assert_eq!(layout[0][0].x, 100.0);
        assert_eq!(layout[1][0].x, 200.0);
        assert_eq!(layout[0][0].y, 75.0);
        assert_eq!(layout[1][0].y, 50.0);
        assert_eq!(layout[1][1].y, 100.0);
    }
}
