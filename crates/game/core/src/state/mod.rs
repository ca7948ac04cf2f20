//! Encounter state: actors, their items, and the rooms they meet in.
//!
//! Ownership is strictly tree-shaped: a [`Room`] owns its [`Enemy`], every
//! [`Actor`] owns its [`Inventory`], and an inventory owns its items.

pub mod actor;
pub mod inventory;
pub mod item;
pub mod room;

pub use actor::{Actor, CombatStats, Combatant, Enemy, Player};
pub use inventory::Inventory;
pub use item::{ActiveBuff, Item, ItemCategory, Weapon};
pub use room::{EnemyRoom, Neighbors, Room, RoomVisitor};
