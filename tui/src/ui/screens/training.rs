use crossterm::event::KeyCode;
use ratatui::Frame;

use model::Topology;
use orchestrator::{RunConfig, RunPhase, RunSubscription, Session};

use crate::state::session::SessionState;
use crate::ui::draw;

use super::Action;

/// The training dashboard: owns the session handle and the view state;
/// all control logic stays in the orchestrator.
pub struct TrainingState {
    session: Session,
    state: SessionState,
    cfg: RunConfig,
    topology: Topology,
}

impl TrainingState {
    pub fn new(session: Session, subscription: RunSubscription, cfg: RunConfig) -> Self {
        let topology = cfg.topology();
        Self {
            session,
            state: SessionState::new(subscription),
            cfg,
            topology,
        }
    }

    pub fn tick(&mut self) {
        self.state.tick();
    }
}

pub fn handle_key(state: &mut TrainingState, key: KeyCode) -> Action {
    let phase = state.session.status().phase;

    match key {
        KeyCode::Char('s') => {
            state.session.start();
            Action::None
        }
        KeyCode::Char(' ') => {
            match phase {
                RunPhase::Running => state.session.pause(),
                RunPhase::Paused => state.session.resume(),
                _ => {}
            }
            Action::None
        }
        KeyCode::Char('n') => {
            state.session.step();
            Action::None
        }
        KeyCode::Char('x') => {
            state.session.stop();
            Action::None
        }
        KeyCode::Char('r') => {
            state.session.reset_network();
            Action::None
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let speed = state.session.speed().saturating_sub(1);
            state.session.set_speed(speed);
            Action::None
        }
        KeyCode::Char('-') => {
            let speed = (state.session.speed() + 1).min(3);
            state.session.set_speed(speed);
            Action::None
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            state.session.stop();
            Action::Transition(super::Screen::Menu(super::menu::MenuState::new()))
        }
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &TrainingState) {
    draw::draw(
        f,
        state.state.view(),
        &state.cfg,
        &state.topology,
        state.session.speed(),
    );
}
