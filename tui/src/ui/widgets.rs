use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use orchestrator::{RunConfig, RunPhase};

use crate::state::model::RunView;
use crate::ui::theme::Theme;

pub fn header<'a>(view: &'a RunView, cfg: &'a RunConfig) -> Paragraph<'a> {
    let phase = match view.status.phase {
        RunPhase::Idle => "IDLE",
        RunPhase::Running => "RUNNING",
        RunPhase::Paused => "PAUSED",
        RunPhase::Stopped => "STOPPED",
        RunPhase::Finished => "FINISHED",
    };

    let loss = view
        .losses
        .last()
        .map(|l| format!("{l:.4}"))
        .unwrap_or_else(|| "-".into());

    let line1 = Line::from(vec![
        Span::styled("PINN Visualizer", Theme::title()),
        Span::raw("  |  "),
        Span::raw(format!("Run: {phase}")),
        Span::raw("  |  "),
        Span::raw(format!(
            "Epoch: {} / {}",
            view.status.current_epoch, view.status.epochs_total
        )),
    ]);

    let line2 = Line::from(vec![
        Span::raw(format!(
            "du/dt = -k·u  (k = {:.2}, λ_PDE = {:.2})",
            cfg.decay, cfg.lambda_pde
        )),
        Span::raw("  |  Current loss: "),
        Span::styled(loss, Theme::accent_cyan()),
    ]);

    Paragraph::new(vec![line1, line2])
        .block(Block::default().borders(Borders::ALL).title("Overview"))
        .wrap(Wrap { trim: true })
}

pub fn model_panel<'a>(cfg: &'a RunConfig, speed: usize, view: &'a RunView) -> Paragraph<'a> {
    let speed_label = match speed {
        0 => "superfast",
        1 => "fast",
        2 => "intermediate",
        _ => "slow",
    };

    let mut lines = vec![
        Line::from(format!("hidden layers: {}", cfg.hidden_layers)),
        Line::from(format!("neurons/layer: {}", cfg.neurons_per_layer)),
        Line::from(format!("learning rate: {}", cfg.learning_rate)),
        Line::from(format!("decay constant: {}", cfg.decay)),
        Line::from(format!("epochs: {}", cfg.epochs)),
        Line::from(format!("lambda pde: {}", cfg.lambda_pde)),
        Line::from(format!("speed: {speed} ({speed_label})")),
        Line::from(""),
    ];

    // key hints follow the lifecycle
    let hints: &[(&str, &str)] = match view.status.phase {
        RunPhase::Idle | RunPhase::Finished => &[("s", "start"), ("r", "reset"), ("q", "back")],
        RunPhase::Running => &[("space", "pause"), ("x", "stop"), ("+/-", "speed")],
        RunPhase::Paused => &[
            ("space", "resume"),
            ("n", "step one neuron"),
            ("x", "stop"),
            ("r", "reset"),
        ],
        RunPhase::Stopped => &[("r", "reset"), ("q", "back")],
    };
    for (key, action) in hints {
        lines.push(Line::from(vec![
            Span::styled(format!("[{key}] "), Theme::accent_cyan()),
            Span::styled(*action, Theme::dim()),
        ]));
    }

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Model Builder"))
        .wrap(Wrap { trim: true })
}

pub fn console<'a>(view: &'a RunView) -> Paragraph<'a> {
    let lines = view
        .trace
        .iter()
        .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(Theme::ACCENT_CYAN))))
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Calculation Console"),
        )
        .wrap(Wrap { trim: true })
}

pub fn logs<'a>(view: &'a RunView) -> Paragraph<'a> {
    let tail = view.logs.iter().rev().take(7).rev();

    let lines = tail
        .map(|l| {
            let style = if l.level == "ERROR" {
                Theme::error()
            } else {
                Theme::dim()
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), style),
                Span::raw(l.message.as_str()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Events"))
        .wrap(Wrap { trim: true })
}
