use crate::factory::{ActorFactory, ItemFactory, RoomFactory};
use crate::kinds::{EnemyKind, RoomKind};
use crate::state::{EnemyRoom, Room};

/// Room factory for the encounter-only dungeon.
///
/// Every kind, known or not, becomes an "Enemy Room" whose neighbors are all
/// enemy rooms, so the room graph loops onto itself.
#[derive(Clone, Debug, Default)]
pub struct StandardRoomFactory {
    spawn: EnemyKind,
}

impl StandardRoomFactory {
    pub const ENEMY_ROOM_NAME: &'static str = "Enemy Room";

    /// `spawn` is the enemy kind placed into each encounter room.
    pub fn new(spawn: EnemyKind) -> Self {
        Self { spawn }
    }

    fn enemy_room(&self, actors: &dyn ActorFactory, items: &dyn ItemFactory) -> Room {
        let enemy = actors.create_enemy(&self.spawn, items);
        Room::Enemy(EnemyRoom::new(
            Self::ENEMY_ROOM_NAME,
            RoomKind::Enemy,
            [RoomKind::Enemy, RoomKind::Enemy, RoomKind::Enemy],
            enemy,
        ))
    }
}

impl RoomFactory for StandardRoomFactory {
    fn create_room(
        &self,
        kind: &RoomKind,
        actors: &dyn ActorFactory,
        items: &dyn ItemFactory,
    ) -> Room {
        match kind {
            RoomKind::Enemy | RoomKind::Unknown(_) => self.enemy_room(actors, items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{StandardActorFactory, StandardItemFactory};
    use crate::state::Combatant;

    fn build(kind: &RoomKind) -> Room {
        StandardRoomFactory::default().create_room(
            kind,
            &StandardActorFactory::default(),
            &StandardItemFactory::default(),
        )
    }

    #[test]
    fn enemy_room_loops_onto_itself() {
        let room = build(&RoomKind::Enemy);
        assert_eq!(room.name(), "Enemy Room");
        assert_eq!(room.kind(), &RoomKind::Enemy);
        assert_eq!(room.neighbor_count(), 3);
        assert!(room.neighbors().iter().all(|kind| kind == &RoomKind::Enemy));
        assert!(!room.is_cleared());
    }

    #[test]
    fn unknown_kind_falls_back_to_enemy_room() {
        let room = build(&RoomKind::from_text("Treasury"));
        let Room::Enemy(room) = room;
        assert_eq!(room.kind(), &RoomKind::Enemy);
        assert_eq!(room.enemy().actor().name(), "Goblin");
    }
}
