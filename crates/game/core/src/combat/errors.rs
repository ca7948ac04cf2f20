use crate::combat::{ActionSlot, CombatPhase};
use crate::error::{ErrorSeverity, GameError};

/// Rejected action-menu input. Callers re-prompt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no selection entered")]
    Empty,

    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("{index} is not between 1 and {len}")]
    OutOfRange { index: usize, len: usize },
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "SELECTION_EMPTY",
            Self::NotANumber { .. } => "SELECTION_NOT_A_NUMBER",
            Self::OutOfRange { .. } => "SELECTION_OUT_OF_RANGE",
        }
    }
}

/// The combat engine was driven out of order or with a stale slot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("expected phase {expected:?}, combat is in {actual:?}")]
    PhaseMismatch {
        expected: CombatPhase,
        actual: CombatPhase,
    },

    #[error("no item in {slot:?}")]
    EmptySlot { slot: ActionSlot },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PhaseMismatch { .. } => "COMBAT_PHASE_MISMATCH",
            Self::EmptySlot { .. } => "COMBAT_EMPTY_SLOT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_selections_are_recoverable() {
        let err = SelectionError::NotANumber {
            input: "abc".into(),
        };
        assert!(err.severity().is_recoverable());
        assert_eq!(err.severity().as_str(), "recoverable");
        assert_eq!(err.error_code(), "SELECTION_NOT_A_NUMBER");
    }

    #[test]
    fn engine_misuse_is_internal() {
        let err = CombatError::PhaseMismatch {
            expected: CombatPhase::AwaitingEnemyAction,
            actual: CombatPhase::Cleared,
        };
        assert!(!err.severity().is_recoverable());
        assert_eq!(err.severity().as_str(), "internal");
    }
}
