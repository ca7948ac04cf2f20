//! Outcomes reported by the combat engine.

use crate::combat::CombatPhase;

/// What an action did to its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    Damage {
        target: String,
        amount: i32,
        remaining_hp: i32,
    },
    Buff {
        verb: String,
        target: String,
        amount: i32,
        resulting_hp: i32,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub actor: String,
    /// Menu label of the item used.
    pub label: String,
    pub effect: ActionEffect,
    /// The item was single-use and has been removed.
    pub consumed: bool,
}

/// Everything that happened during one combat round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub player: Option<ActionOutcome>,
    /// `None` when the enemy was defeated first or passed.
    pub enemy: Option<ActionOutcome>,
    pub phase: CombatPhase,
}
