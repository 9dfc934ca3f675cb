use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computes the main dashboard regions.
///
/// # Returns
/// (header, body, bottom)
pub fn vertical(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(14),
            Constraint::Length(9),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Splits the body into (model panel, diagram, charts column).
pub fn body(area: Rect) -> (Rect, Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30),
            Constraint::Min(40),
            Constraint::Length(36),
        ])
        .split(area);

    (cols[0], cols[1], cols[2])
}

/// Splits the charts column into (loss, prediction).
pub fn charts(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    (rows[0], rows[1])
}

/// Splits the bottom row into (calculation console, event log).
pub fn bottom(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    (cols[0], cols[1])
}
