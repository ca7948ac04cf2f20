//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from collaborators (renderer, input) and from the combat
//! engine so clients can bubble them up with consistent context.
use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{component} not set")]
    MissingComponent { component: Component },

    #[error("player input closed")]
    InputClosed,

    #[error("console I/O failed")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Combat(#[from] game_core::CombatError),
}

/// Collaborators the runtime cannot be built without.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Component {
    Renderer,
    Input,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Component::Renderer => "renderer",
            Component::Input => "player input",
        };
        write!(f, "{}", label)
    }
}
