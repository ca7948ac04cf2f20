//! Semantic colors for console output.
use crossterm::style::{Color, Stylize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Banner,
    Player,
    Enemy,
    Damage,
    Heal,
    Warning,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Banner => Color::Cyan,
            Tone::Player => Color::Yellow,
            Tone::Enemy => Color::Red,
            Tone::Damage => Color::DarkRed,
            Tone::Heal => Color::Green,
            Tone::Warning => Color::Magenta,
        }
    }
}

/// Applies [`Tone`] colors when enabled, passes text through otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.enabled {
            text.with(tone.color()).bold().to_string()
        } else {
            text.to_owned()
        }
    }
}
