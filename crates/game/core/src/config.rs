use crate::kinds::{EnemyKind, RoomKind};

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Kind of the room the player starts in.
    pub starting_room: RoomKind,
    /// Enemy placed into every encounter room built by the standard room factory.
    pub enemy_spawn: EnemyKind,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of neighbor slots every room carries. The previous room is never one of them.
    pub const NEIGHBOR_SLOTS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_ROOM: RoomKind = RoomKind::Enemy;
    pub const DEFAULT_ENEMY_SPAWN: EnemyKind = EnemyKind::Goblin;

    pub fn new() -> Self {
        Self {
            starting_room: Self::DEFAULT_STARTING_ROOM,
            enemy_spawn: Self::DEFAULT_ENEMY_SPAWN,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
