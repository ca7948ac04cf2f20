//! Combat participants.
//!
//! [`Actor`] carries everything shared by the player and enemies; [`Player`]
//! and [`Enemy`] wrap it and add their own state.

use crate::kinds::{EnemyKind, ItemKind};
use crate::state::Inventory;

/// Fixed combat stats. Set once at creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub strength: i32,
    pub speed: i32,
    pub agility: i32,
}

impl CombatStats {
    pub const fn new(strength: i32, speed: i32, agility: i32) -> Self {
        Self {
            strength,
            speed,
            agility,
        }
    }
}

/// Base state of any hp-bearing participant.
///
/// # Invariants
///
/// - `hp` has no floor: damage may push it below zero
/// - An actor is defeated once `hp <= 0`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    name: String,
    hp: i32,
    stats: CombatStats,
    inventory: Inventory,
}

impl Actor {
    pub fn new(name: impl Into<String>, hp: i32, stats: CombatStats) -> Self {
        Self {
            name: name.into(),
            hp,
            stats,
            inventory: Inventory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn stats(&self) -> CombatStats {
        self.stats
    }

    pub fn strength(&self) -> i32 {
        self.stats.strength
    }

    pub fn speed(&self) -> i32 {
        self.stats.speed
    }

    pub fn agility(&self) -> i32 {
        self.stats.agility
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Subtracts `amount` from hp without clamping.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Adds `amount` to hp. There is no maximum.
    pub fn restore(&mut self, amount: i32) {
        self.hp = self.hp.saturating_add(amount);
    }
}

/// Shared access to the underlying [`Actor`] of a participant.
pub trait Combatant {
    fn actor(&self) -> &Actor;
    fn actor_mut(&mut self) -> &mut Actor;
}

/// The player character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    actor: Actor,
}

impl Player {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }
}

impl Combatant for Player {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }
}

/// An enemy together with the item kinds it drops when defeated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    actor: Actor,
    kind: EnemyKind,
    rewards: Vec<ItemKind>,
}

impl Enemy {
    pub fn new(actor: Actor, kind: EnemyKind, rewards: Vec<ItemKind>) -> Self {
        Self {
            actor,
            kind,
            rewards,
        }
    }

    pub fn kind(&self) -> &EnemyKind {
        &self.kind
    }

    pub fn rewards(&self) -> &[ItemKind] {
        &self.rewards
    }
}

impl Combatant for Enemy {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }
}
