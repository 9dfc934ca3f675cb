use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::state::model::RunView;
use crate::ui::theme::Theme;

/// Renders both live charts from the result series: loss-vs-epoch on
/// top, prediction-vs-target below.
pub fn render(f: &mut Frame, loss_area: Rect, prediction_area: Rect, view: &RunView) {
    let loss_points = to_points(&view.losses);
    let prediction_points = to_points(&view.predictions);
    let target_points = to_points(&view.targets);

    let x_max = view.losses.len().max(1) as f64;

    let loss_max = max_of(&view.losses).max(0.1);
    let loss_chart = Chart::new(vec![series("Loss", Theme::SERIES_LOSS, &loss_points)])
        .block(Block::default().borders(Borders::ALL).title("Loss vs Epoch"))
        .x_axis(axis("Epoch", 1.0, x_max))
        .y_axis(axis("Loss", 0.0, loss_max as f64));
    f.render_widget(loss_chart, loss_area);

    let value_max = max_of(&view.predictions).max(max_of(&view.targets)).max(1.0);
    let prediction_chart = Chart::new(vec![
        series("Prediction", Theme::SERIES_PREDICTION, &prediction_points),
        series("Target", Theme::SERIES_TARGET, &target_points),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Prediction vs Target"),
    )
    .x_axis(axis("Epoch", 1.0, x_max))
    .y_axis(axis("Value", 0.0, value_max as f64));
    f.render_widget(prediction_chart, prediction_area);
}

/// Epoch-indexed points: entry `i` plots at epoch `i + 1`.
fn to_points(series: &[f32]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, &v)| ((i + 1) as f64, v as f64))
        .collect()
}

fn max_of(series: &[f32]) -> f32 {
    series.iter().copied().fold(0.0, f32::max)
}

fn series<'a>(
    name: &'a str,
    color: ratatui::style::Color,
    data: &'a [(f64, f64)],
) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

fn axis<'a>(title: &'a str, min: f64, max: f64) -> Axis<'a> {
    Axis::default()
        .title(title)
        .style(Theme::muted())
        .bounds([min, max])
        .labels(vec![
            Span::styled(format!("{min:.1}"), Theme::muted()),
            Span::styled(format!("{:.1}", (min + max) / 2.0), Theme::muted()),
            Span::styled(format!("{max:.1}"), Theme::muted()),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_epoch_indexed_from_one() {
        let points = to_points(&[0.9, 0.5, 0.25]);
        assert_eq!(points, vec![(1.0, 0.9f64), (2.0, 0.5), (3.0, 0.25)]);
    }

    #[test]
    fn max_of_empty_series_is_zero() {
        assert_eq!(max_of(&[]), 0.0);
        assert_eq!(max_of(&[0.2, 0.7, 0.1]), 0.7);
    }
}
