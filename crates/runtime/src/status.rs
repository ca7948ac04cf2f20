//! Loop status and the continue/quit decision.

use thiserror::Error;

/// Overall state of a play session.
///
/// `Victory` exists for completeness; no rule currently produces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Victory,
    Gameover,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Answer to the prompt shown after a room is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Decision {
    #[strum(serialize = "y", serialize = "yes", serialize = "c", serialize = "continue")]
    Continue,
    #[strum(serialize = "q", serialize = "quit", serialize = "n", serialize = "no")]
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("'{input}' is neither continue (y) nor quit (q)")]
pub struct DecisionError {
    pub input: String,
}

impl Decision {
    pub fn parse(input: &str) -> Result<Self, DecisionError> {
        let trimmed = input.trim();
        trimmed.parse().map_err(|_| DecisionError {
            input: trimmed.to_owned(),
        })
    }
}
