pub mod builder;
pub mod menu;
pub mod training;

use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Builder(builder::BuilderState),
    Training(training::TrainingState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Builder(s) => builder::draw(f, s),
            Screen::Training(s) => training::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key),
            Screen::Builder(s) => builder::handle_key(s, key),
            Screen::Training(s) => training::handle_key(s, key),
        }
    }

    /// Per-frame state refresh; only the training screen has live state.
    pub fn tick(&mut self) {
        if let Screen::Training(s) = self {
            s.tick();
        }
    }
}
