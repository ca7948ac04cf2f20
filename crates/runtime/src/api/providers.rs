//! Abstraction for sourcing player intent.
//!
//! The runtime never parses input itself: it asks a [`PlayerInput`] for a raw
//! line and validates it against the current menu, re-prompting on rejection.
use std::collections::VecDeque;

use game_core::ActionMenu;

use super::errors::{Result, RuntimeError};

/// Trait for reading raw player answers.
///
/// Different implementations can handle:
/// - Console input (line-based)
/// - Scripted/replayed sessions
/// - Testing fixtures
pub trait PlayerInput {
    /// Read one answer to the action prompt for `menu`.
    fn read_action(&mut self, menu: &ActionMenu) -> Result<String>;

    /// Read one answer to the continue/quit prompt.
    fn read_decision(&mut self) -> Result<String>;
}

/// Input that replays a fixed list of answers in order.
///
/// Action and decision prompts draw from the same queue. Running out of
/// answers reports [`RuntimeError::InputClosed`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self) -> Result<String> {
        self.answers.pop_front().ok_or(RuntimeError::InputClosed)
    }
}

impl PlayerInput for ScriptedInput {
    fn read_action(&mut self, _menu: &ActionMenu) -> Result<String> {
        self.next()
    }

    fn read_decision(&mut self) -> Result<String> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_answers_in_order_then_closes() {
        let mut input = ScriptedInput::new(["2", "q"]);
        let menu = ActionMenu::default();

        assert_eq!(input.remaining(), 2);
        assert_eq!(input.read_action(&menu).unwrap(), "2");
        assert_eq!(input.read_decision().unwrap(), "q");
        assert_eq!(input.remaining(), 0);
        assert!(matches!(
            input.read_action(&menu),
            Err(RuntimeError::InputClosed)
        ));
    }
}
