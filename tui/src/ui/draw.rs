use ratatui::{widgets::Block, Frame};

use model::Topology;
use orchestrator::RunConfig;

use crate::state::model::RunView;
use crate::ui::theme::Theme;

use super::{charts, diagram, layout, widgets};

/// Draws the full training dashboard.
pub fn draw(f: &mut Frame, view: &RunView, cfg: &RunConfig, topology: &Topology, speed: usize) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, bottom_area) = layout::vertical(area);
    let (panel_area, diagram_area, charts_area) = layout::body(body_area);
    let (loss_area, prediction_area) = layout::charts(charts_area);
    let (console_area, logs_area) = layout::bottom(bottom_area);

    f.render_widget(widgets::header(view, cfg), header_area);
    f.render_widget(widgets::model_panel(cfg, speed, view), panel_area);
    diagram::render(f, diagram_area, view, topology);
    charts::render(f, loss_area, prediction_area, view);
    f.render_widget(widgets::console(view), console_area);
    f.render_widget(widgets::logs(view), logs_area);
}
