//! Factories that build items, actors and rooms from presets.
//!
//! Factories are pure: the same inputs always produce equivalent values.
//! They are passed by reference to whatever they build and are never retained
//! by the values they create.

pub mod actors;
pub mod catalog;
pub mod items;
pub mod rooms;

pub use actors::StandardActorFactory;
pub use catalog::{ActorCatalog, EnemyPreset, ItemCatalog, ItemEffect, ItemPreset, PlayerPreset};
pub use items::StandardItemFactory;
pub use rooms::StandardRoomFactory;

use crate::config::GameConfig;
use crate::kinds::{EnemyKind, ItemKind, RoomKind};
use crate::state::{Enemy, Inventory, Player, Room};

pub trait ItemFactory {
    /// Builds an item of `kind` and moves it into `inventory`.
    ///
    /// Returns `false` without touching the inventory for unknown kinds.
    fn create_and_store_item(&self, inventory: &mut Inventory, kind: &ItemKind) -> bool;

    /// Display name items of `kind` are created with.
    fn display_name(&self, kind: &ItemKind) -> Option<&str>;
}

pub trait ActorFactory {
    /// Builds an enemy of `kind`, equipping it through `items`.
    ///
    /// Unknown kinds fall back to the default enemy.
    fn create_enemy(&self, kind: &EnemyKind, items: &dyn ItemFactory) -> Enemy;

    fn create_player(&self, items: &dyn ItemFactory) -> Player;
}

pub trait RoomFactory {
    /// Builds a room of `kind`. Unknown kinds fall back to an encounter room.
    fn create_room(
        &self,
        kind: &RoomKind,
        actors: &dyn ActorFactory,
        items: &dyn ItemFactory,
    ) -> Room;
}

/// The three factories a game session builds its content with.
pub struct Factories {
    items: Box<dyn ItemFactory>,
    actors: Box<dyn ActorFactory>,
    rooms: Box<dyn RoomFactory>,
}

impl Factories {
    pub fn new(
        items: impl ItemFactory + 'static,
        actors: impl ActorFactory + 'static,
        rooms: impl RoomFactory + 'static,
    ) -> Self {
        Self {
            items: Box::new(items),
            actors: Box::new(actors),
            rooms: Box::new(rooms),
        }
    }

    /// Standard factories over the built-in catalogs.
    pub fn standard() -> Self {
        Self::from_catalogs(
            ItemCatalog::default(),
            ActorCatalog::default(),
            &GameConfig::default(),
        )
    }

    /// Standard factories over the given catalogs.
    pub fn from_catalogs(items: ItemCatalog, actors: ActorCatalog, config: &GameConfig) -> Self {
        Self::new(
            StandardItemFactory::new(items),
            StandardActorFactory::new(actors),
            StandardRoomFactory::new(config.enemy_spawn.clone()),
        )
    }

    pub fn items(&self) -> &dyn ItemFactory {
        self.items.as_ref()
    }

    pub fn actors(&self) -> &dyn ActorFactory {
        self.actors.as_ref()
    }

    pub fn create_player(&self) -> Player {
        self.actors.create_player(self.items())
    }

    pub fn create_enemy(&self, kind: &EnemyKind) -> Enemy {
        self.actors.create_enemy(kind, self.items())
    }

    pub fn create_room(&self, kind: &RoomKind) -> Room {
        self.rooms.create_room(kind, self.actors(), self.items())
    }
}

impl Default for Factories {
    fn default() -> Self {
        Self::standard()
    }
}

impl core::fmt::Debug for Factories {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Factories").finish_non_exhaustive()
    }
}
