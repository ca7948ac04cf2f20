//! Deterministic encounter rules and data types shared across clients.
//!
//! `game-core` defines the canonical rules (actors, items, rooms, combat) and
//! exposes pure APIs that the runtime and content loaders build on. Combat
//! state changes flow through [`combat::CombatEngine`]; room progression
//! flows through [`map::Map`].
pub mod combat;
pub mod config;
pub mod error;
pub mod factory;
pub mod kinds;
pub mod map;
pub mod policy;
pub mod state;

pub use combat::{
    ActionEffect, ActionMenu, ActionOutcome, ActionSlot, CombatEngine, CombatError, CombatPhase,
    MenuEntry, RoundReport, SelectionError,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use factory::{
    ActorCatalog, ActorFactory, EnemyPreset, Factories, ItemCatalog, ItemEffect, ItemFactory,
    ItemPreset, PlayerPreset, RoomFactory, StandardActorFactory, StandardItemFactory,
    StandardRoomFactory,
};
pub use kinds::{EnemyKind, ItemKind, RoomKind};
pub use map::Map;
pub use policy::{EnemyActionPolicy, FirstAction, FirstNeighbor, NeighborPolicy};
pub use state::{
    ActiveBuff, Actor, CombatStats, Combatant, Enemy, EnemyRoom, Inventory, Item, ItemCategory,
    Neighbors, Player, Room, RoomVisitor, Weapon,
};
