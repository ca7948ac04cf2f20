//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`SelectionError`, `CombatError`) live next to the
//! code that raises them; this module provides the shared classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: bad input that the caller handles by asking again
/// - **Internal**: the engine was driven out of order; indicates a caller bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - re-prompt and retry.
    ///
    /// Examples: non-numeric menu selection, index outside the menu
    Recoverable,

    /// Internal error - unexpected call sequence or stale reference.
    ///
    /// Examples: resolving an enemy action while the player is still to act
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
