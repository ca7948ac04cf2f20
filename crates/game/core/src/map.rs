//! Linear room progression.
//!
//! The [`Map`] only knows the room the player is standing in. Advancing builds
//! a fresh room and drops the old one; no history is kept.

use crate::factory::{Factories, ItemFactory};
use crate::kinds::RoomKind;
use crate::policy::{FirstNeighbor, NeighborPolicy};
use crate::state::{Player, Room, RoomVisitor};

pub struct Map {
    current: Room,
    policy: Box<dyn NeighborPolicy>,
}

impl Map {
    /// Creates a map starting in `room`, advancing through neighbor slot 0.
    pub fn new(room: Room) -> Self {
        Self::with_policy(room, FirstNeighbor)
    }

    pub fn with_policy(room: Room, policy: impl NeighborPolicy + 'static) -> Self {
        Self::with_boxed_policy(room, Box::new(policy))
    }

    pub fn with_boxed_policy(room: Room, policy: Box<dyn NeighborPolicy>) -> Self {
        Self {
            current: room,
            policy,
        }
    }

    pub fn current_room(&self) -> &Room {
        &self.current
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.current
    }

    pub fn room_name(&self) -> &str {
        self.current.name()
    }

    pub fn room_kind(&self) -> &RoomKind {
        self.current.kind()
    }

    pub fn neighbor_count(&self) -> usize {
        self.current.neighbor_count()
    }

    pub fn is_cleared(&self) -> bool {
        self.current.is_cleared()
    }

    pub fn accept<V: RoomVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        self.current.accept(visitor)
    }

    pub fn bestow_rewards(&self, player: &mut Player, items: &dyn ItemFactory) -> usize {
        self.current.bestow_rewards(player, items)
    }

    /// Kind of the room [`advance`](Self::advance) would build next.
    pub fn next_kind(&self) -> RoomKind {
        self.policy.choose_neighbor(self.current.neighbors())
    }

    /// Replaces the current room with a new room of the next kind.
    ///
    /// This happens whether or not the current room is cleared; callers gate
    /// on [`is_cleared`](Self::is_cleared) themselves. Returns the new room.
    pub fn advance(&mut self, factories: &Factories) -> &Room {
        let kind = self.next_kind();
        self.current = factories.create_room(&kind);
        &self.current
    }
}

impl core::fmt::Debug for Map {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Map")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Combatant, Neighbors};

    #[test]
    fn advance_replaces_room_even_when_not_cleared() {
        let factories = Factories::standard();
        let mut map = Map::new(factories.create_room(&RoomKind::Enemy));

        let Room::Enemy(room) = map.current_room_mut();
        room.enemy_mut().actor_mut().take_damage(4);
        assert!(!map.is_cleared());

        map.advance(&factories);

        let Room::Enemy(room) = map.current_room();
        assert_eq!(room.enemy().actor().hp(), 10);
        assert_eq!(map.room_kind(), &RoomKind::Enemy);
    }

    #[test]
    fn custom_policy_picks_the_next_kind() {
        let factories = Factories::standard();
        let policy = |neighbors: &Neighbors| neighbors[2].clone();
        let map = Map::with_policy(factories.create_room(&RoomKind::Enemy), policy);
        assert_eq!(map.next_kind(), RoomKind::Enemy);
    }
}
