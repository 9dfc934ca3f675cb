use ratatui::{
    layout::Rect,
    style::Color,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

use model::{compute_layout, Point, Topology};
use orchestrator::{Highlight, HighlightKind};

use crate::state::model::RunView;
use crate::ui::theme::Theme;

// Virtual canvas coordinates; the widget scales them to the terminal.
const CANVAS_W: f32 = 100.0;
const CANVAS_H: f32 = 100.0;
const NEURON_RADIUS: f64 = 2.5;

/// Renders the network diagram: connections between layout coordinates,
/// neurons colored by the current highlight set, activation values next
/// to every non-input neuron.
pub fn render(f: &mut Frame, area: Rect, view: &RunView, topology: &Topology) {
    let widths = topology.widths();
    let layout = compute_layout(widths, CANVAS_W, CANVAS_H);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Network"))
        .x_bounds([0.0, CANVAS_W as f64])
        .y_bounds([0.0, CANVAS_H as f64])
        .paint(|ctx| {
            // connections first so neurons draw on top
            for l in 0..layout.len().saturating_sub(1) {
                for from in &layout[l] {
                    for to in &layout[l + 1] {
                        ctx.draw(&CanvasLine {
                            x1: x(from),
                            y1: y(from),
                            x2: x(to),
                            y2: y(to),
                            color: Theme::CONNECTION,
                        });
                    }
                }
            }

            for (l, layer) in layout.iter().enumerate() {
                for (j, point) in layer.iter().enumerate() {
                    ctx.draw(&Circle {
                        x: x(point),
                        y: y(point),
                        radius: NEURON_RADIUS,
                        color: neuron_color(&view.highlights, l, j),
                    });

                    // activation value beside the neuron (input layer shows
                    // the raw input sample)
                    if let Some(a) = view.activations.get(l).and_then(|row| row.get(j)) {
                        ctx.print(
                            x(point) + NEURON_RADIUS + 1.0,
                            y(point),
                            Span::styled(format!("{a:.2}"), Theme::dim()),
                        );
                    }
                }

                if let Some(first) = layer.first() {
                    let label = if l == 0 {
                        "Input".to_string()
                    } else if l == layout.len() - 1 {
                        "Output".to_string()
                    } else {
                        format!("Hidden {l}")
                    };
                    ctx.print(
                        x(first) - 3.0,
                        CANVAS_H as f64 - 2.0,
                        Span::styled(label, Theme::muted()),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

fn x(p: &Point) -> f64 {
    p.x as f64
}

// canvas y grows upward, layout y grows downward
fn y(p: &Point) -> f64 {
    (CANVAS_H - p.y) as f64
}

fn neuron_color(highlights: &[Highlight], layer: usize, index: usize) -> Color {
    let mark = highlights
        .iter()
        .find(|h| h.layer == layer && h.index == index)
        .map(|h| h.kind);

    match mark {
        Some(HighlightKind::Active) => Theme::NEURON_ACTIVE,
        Some(HighlightKind::Input) => Theme::NEURON_INPUT,
        None => Theme::NEURON_IDLE,
    }
}
