//! Combat resolution system.
//!
//! All combat is deterministic: damage and buffs apply immediately, with no
//! resistances, misses or randomness.
//!
//! - [`ActionMenu`]: the ordered, 1-indexed list of usable items
//! - [`CombatEngine`]: the per-encounter phase machine
//! - [`ActionOutcome`] / [`RoundReport`]: what happened, for presentation layers

pub mod engine;
pub mod errors;
pub mod menu;
pub mod result;

pub use engine::{CombatEngine, CombatPhase};
pub use errors::{CombatError, SelectionError};
pub use menu::{ActionMenu, ActionSlot, MenuEntry};
pub use result::{ActionEffect, ActionOutcome, RoundReport};
