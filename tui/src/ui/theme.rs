use ratatui::style::{Color, Modifier, Style};

/// Neon-green cyber theme.
///
/// Base aesthetic:
/// - neon green foreground
/// - near-black background
/// - accent colors reserved for animation highlights and chart series
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG_NEON: Color = Color::Rgb(57, 255, 20);
    pub const FG_DIM: Color = Color::Rgb(0, 190, 0);
    pub const FG_MUTED: Color = Color::Rgb(80, 90, 80);

    // Accents (chosen to not clash with neon green)
    pub const ACCENT_CYAN: Color = Color::Rgb(0, 255, 255);
    pub const ACCENT_MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const ACCENT_RED: Color = Color::Rgb(255, 70, 70);

    // Diagram marks
    pub const NEURON_IDLE: Color = Self::FG_DIM;
    pub const NEURON_ACTIVE: Color = Self::ACCENT_YELLOW;
    pub const NEURON_INPUT: Color = Self::ACCENT_CYAN;
    pub const CONNECTION: Color = Self::FG_MUTED;

    // Chart series
    pub const SERIES_LOSS: Color = Self::ACCENT_MAGENTA;
    pub const SERIES_PREDICTION: Color = Self::FG_NEON;
    pub const SERIES_TARGET: Color = Self::ACCENT_RED;

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    /// Titles (bold neon).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG_NEON)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_cyan() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }
}
