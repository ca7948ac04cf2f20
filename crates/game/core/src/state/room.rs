//! Rooms and the encounters they hold.
//!
//! [`Room`] is a tagged union over room kinds. Consumers that need per-kind
//! behavior either match on it exhaustively or implement [`RoomVisitor`].

use crate::config::GameConfig;
use crate::factory::ItemFactory;
use crate::kinds::RoomKind;
use crate::state::{Combatant, Enemy, Player};

/// Kinds of the rooms reachable from a room.
pub type Neighbors = [RoomKind; GameConfig::NEIGHBOR_SLOTS];

/// Per-kind dispatch over rooms.
pub trait RoomVisitor {
    type Output;

    fn visit_enemy_room(&mut self, room: &EnemyRoom) -> Self::Output;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Room {
    Enemy(EnemyRoom),
}

impl Room {
    pub fn name(&self) -> &str {
        match self {
            Self::Enemy(room) => room.name(),
        }
    }

    pub fn kind(&self) -> &RoomKind {
        match self {
            Self::Enemy(room) => room.kind(),
        }
    }

    pub fn neighbors(&self) -> &Neighbors {
        match self {
            Self::Enemy(room) => room.neighbors(),
        }
    }

    pub fn neighbor_count(&self) -> usize {
        self.neighbors().len()
    }

    pub fn is_cleared(&self) -> bool {
        match self {
            Self::Enemy(room) => room.is_cleared(),
        }
    }

    /// Hands this room's rewards to `player`. Returns how many items were created.
    pub fn bestow_rewards(&self, player: &mut Player, items: &dyn ItemFactory) -> usize {
        match self {
            Self::Enemy(room) => room.bestow_rewards(player, items),
        }
    }

    pub fn accept<V: RoomVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Enemy(room) => visitor.visit_enemy_room(room),
        }
    }
}

/// Encounter room holding exactly one enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyRoom {
    name: String,
    kind: RoomKind,
    neighbors: Neighbors,
    enemy: Enemy,
}

impl EnemyRoom {
    pub fn new(name: impl Into<String>, kind: RoomKind, neighbors: Neighbors, enemy: Enemy) -> Self {
        Self {
            name: name.into(),
            kind,
            neighbors,
            enemy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RoomKind {
        &self.kind
    }

    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn enemy_mut(&mut self) -> &mut Enemy {
        &mut self.enemy
    }

    /// Cleared once the enemy's hp drops to zero or below.
    pub fn is_cleared(&self) -> bool {
        self.enemy.actor().is_defeated()
    }

    /// Creates every reward kind of the enemy into the player's inventory.
    ///
    /// Kinds the item factory does not know are skipped, so the returned
    /// count may be smaller than the reward list.
    pub fn bestow_rewards(&self, player: &mut Player, items: &dyn ItemFactory) -> usize {
        let inventory = player.actor_mut().inventory_mut();
        self.enemy
            .rewards()
            .iter()
            .filter(|kind| items.create_and_store_item(inventory, kind))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::StandardItemFactory;
    use crate::kinds::{EnemyKind, ItemKind};
    use crate::state::{Actor, CombatStats};

    fn room_with_rewards(rewards: Vec<ItemKind>) -> EnemyRoom {
        let goblin = Enemy::new(
            Actor::new("Goblin", 10, CombatStats::new(1, 1, 2)),
            EnemyKind::Goblin,
            rewards,
        );
        EnemyRoom::new("Enemy Room", RoomKind::Enemy, Default::default(), goblin)
    }

    #[test]
    fn rewards_one_item_per_known_kind() {
        let room = room_with_rewards(vec![
            ItemKind::HealthPotion,
            ItemKind::from_text("Axe"),
            ItemKind::Sword,
        ]);
        let mut player = Player::new(Actor::new("Player", 100, CombatStats::default()));

        let granted = room.bestow_rewards(&mut player, &StandardItemFactory::default());

        assert_eq!(granted, 2);
        let inventory = player.actor().inventory();
        assert_eq!(inventory.total_items(), 2);
        assert_eq!(inventory.count_of(&ItemKind::HealthPotion), 1);
        assert_eq!(inventory.count_of(&ItemKind::Sword), 1);
    }

    #[test]
    fn cleared_at_zero_and_below() {
        let mut room = room_with_rewards(Vec::new());
        assert!(!room.is_cleared());

        room.enemy_mut().actor_mut().take_damage(9);
        assert!(!room.is_cleared());

        room.enemy_mut().actor_mut().take_damage(1);
        assert_eq!(room.enemy().actor().hp(), 0);
        assert!(Room::Enemy(room.clone()).is_cleared());

        room.enemy_mut().actor_mut().take_damage(3);
        assert_eq!(room.enemy().actor().hp(), -3);
        assert!(room.is_cleared());
    }
}
