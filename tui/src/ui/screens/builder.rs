use std::sync::Arc;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use orchestrator::{
    service::{HttpTrainService, LocalTrainService, TrainService},
    RunConfig, Session,
};

use crate::ui::theme::Theme;

use super::{menu::centered_rect, Action, Screen};

const ENV_API_URL: &str = "PINN_API_URL";

const FIELDS: &[&str] = &[
    "Hidden Layers",
    "Neurons per Layer",
    "Learning Rate",
    "Decay Constant",
    "Epochs",
    "Lambda PDE",
    "Speed",
    "Backend",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Remote,
    Local,
}

pub struct BuilderState {
    pub cfg: RunConfig,
    pub backend: BackendKind,
    pub selected: usize,
    pub error: Option<String>,
}

impl BuilderState {
    pub fn new() -> Self {
        Self {
            cfg: RunConfig::default(),
            backend: BackendKind::Remote,
            selected: 0,
            error: None,
        }
    }

    fn adjust(&mut self, up: bool) {
        let cfg = &mut self.cfg;
        match self.selected {
            0 => cfg.hidden_layers = bump(cfg.hidden_layers, up, 1, 4),
            1 => cfg.neurons_per_layer = bump(cfg.neurons_per_layer, up, 1, 8),
            2 => cfg.learning_rate = bump_f32(cfg.learning_rate, up, 0.001, 0.001, 1.0),
            3 => cfg.decay = bump_f32(cfg.decay, up, 0.1, 0.0, 5.0),
            4 => cfg.epochs = bump(cfg.epochs, up, 1, 100),
            5 => cfg.lambda_pde = bump_f32(cfg.lambda_pde, up, 0.01, 0.0, 10.0),
            6 => cfg.speed = bump(cfg.speed, up, 0, 3),
            _ => {
                self.backend = match self.backend {
                    BackendKind::Remote => BackendKind::Local,
                    BackendKind::Local => BackendKind::Remote,
                }
            }
        }
    }
}

fn bump(value: usize, up: bool, min: usize, max: usize) -> usize {
    if up {
        (value + 1).min(max)
    } else {
        value.saturating_sub(1).max(min)
    }
}

fn bump_f32(value: f32, up: bool, step: f32, min: f32, max: f32) -> f32 {
    let next = if up { value + step } else { value - step };
    next.clamp(min, max)
}

fn base_url() -> String {
    std::env::var(ENV_API_URL).unwrap_or_else(|_| orchestrator::service::DEFAULT_BASE_URL.into())
}

pub fn handle_key(state: &mut BuilderState, key: KeyCode) -> Action {
    state.error = None;

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            if state.selected > 0 {
                state.selected -= 1;
            }
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected < FIELDS.len() - 1 {
                state.selected += 1;
            }
            Action::None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.adjust(false);
            Action::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.adjust(true);
            Action::None
        }
        KeyCode::Enter => build(state),
        KeyCode::Esc | KeyCode::Char('q') => {
            Action::Transition(Screen::Menu(super::menu::MenuState::new()))
        }
        _ => Action::None,
    }
}

fn build(state: &mut BuilderState) -> Action {
    let service: Arc<dyn TrainService> = match state.backend {
        BackendKind::Remote => Arc::new(HttpTrainService::new(base_url())),
        BackendKind::Local => Arc::new(LocalTrainService),
    };

    match Session::new(state.cfg.clone(), service) {
        Ok((session, subscription)) => Action::Transition(Screen::Training(
            super::training::TrainingState::new(session, subscription, state.cfg.clone()),
        )),
        Err(e) => {
            state.error = Some(format!("cannot start session: {e}"));
            Action::None
        }
    }
}

pub fn draw(f: &mut Frame, state: &BuilderState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(55, 75, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(FIELDS.len() as u16 + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Model Builder",
            Theme::title().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    draw_fields(f, chunks[1], state);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("remote service: {}", base_url()),
            Theme::muted(),
        )),
        chunks[2],
    );

    if let Some(err) = &state.error {
        f.render_widget(
            Paragraph::new(Span::styled(format!(" ✖ {err}"), Theme::error())),
            chunks[3],
        );
    }

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("←→", Theme::dim()),
            Span::styled("  adjust    ", Theme::muted()),
            Span::styled("↑↓", Theme::dim()),
            Span::styled("  select    ", Theme::muted()),
            Span::styled("enter", Theme::dim()),
            Span::styled("  build    ", Theme::muted()),
            Span::styled("esc", Theme::dim()),
            Span::styled("  back", Theme::muted()),
        ])),
        chunks[5],
    );
}

fn draw_fields(f: &mut Frame, area: Rect, state: &BuilderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cfg = &state.cfg;
    let values = [
        cfg.hidden_layers.to_string(),
        cfg.neurons_per_layer.to_string(),
        format!("{:.3}", cfg.learning_rate),
        format!("{:.1}", cfg.decay),
        cfg.epochs.to_string(),
        format!("{:.2}", cfg.lambda_pde),
        cfg.speed.to_string(),
        match state.backend {
            BackendKind::Remote => "remote".to_string(),
            BackendKind::Local => "local".to_string(),
        },
    ];

    let lines: Vec<Line> = FIELDS
        .iter()
        .zip(values.iter())
        .enumerate()
        .map(|(i, (label, value))| {
            let selected = i == state.selected;
            let (prefix, style) = if selected {
                ("▶ ", Theme::title())
            } else {
                ("  ", Theme::dim())
            };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{label:<18}"), style),
                Span::styled(value.clone(), if selected { Theme::accent_cyan() } else { Theme::text() }),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
