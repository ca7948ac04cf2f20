//! Read-only snapshots handed to renderers.
use game_core::{
    Actor, Combatant, EnemyKind, EnemyRoom, ItemFactory, Map, Player, RoomKind, RoomVisitor,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub name: String,
    pub hp: i32,
    pub strength: i32,
    pub speed: i32,
    pub agility: i32,
    pub item_count: usize,
}

impl PlayerView {
    pub fn from_player(player: &Player) -> Self {
        let actor = player.actor();
        Self {
            name: actor.name().to_owned(),
            hp: actor.hp(),
            strength: actor.strength(),
            speed: actor.speed(),
            agility: actor.agility(),
            item_count: actor.inventory().total_items(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyView {
    pub name: String,
    pub kind: EnemyKind,
    pub hp: i32,
    pub strength: i32,
    pub speed: i32,
    pub agility: i32,
}

impl EnemyView {
    fn new(kind: &EnemyKind, actor: &Actor) -> Self {
        Self {
            name: actor.name().to_owned(),
            kind: kind.clone(),
            hp: actor.hp(),
            strength: actor.strength(),
            speed: actor.speed(),
            agility: actor.agility(),
        }
    }
}

/// Data specific to the concrete room kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomDetail {
    Enemy(EnemyView),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomView {
    pub name: String,
    pub kind: RoomKind,
    pub neighbor_count: usize,
    pub cleared: bool,
    pub detail: RoomDetail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub round: u64,
    pub player: PlayerView,
    pub room: RoomView,
}

impl GameView {
    pub fn capture(round: u64, player: &Player, map: &Map) -> Self {
        Self {
            round,
            player: PlayerView::from_player(player),
            room: map.accept(&mut RoomSnapshot),
        }
    }
}

/// A [`GameView`] of a just-cleared room plus what the player is about to receive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearedView {
    pub view: GameView,
    pub rewards: Vec<String>,
}

impl ClearedView {
    pub fn capture(round: u64, player: &Player, map: &Map, items: &dyn ItemFactory) -> Self {
        Self {
            view: GameView::capture(round, player, map),
            rewards: map.accept(&mut RewardNames { items }),
        }
    }
}

struct RoomSnapshot;

impl RoomVisitor for RoomSnapshot {
    type Output = RoomView;

    fn visit_enemy_room(&mut self, room: &EnemyRoom) -> RoomView {
        let enemy = room.enemy();
        RoomView {
            name: room.name().to_owned(),
            kind: room.kind().clone(),
            neighbor_count: room.neighbors().len(),
            cleared: room.is_cleared(),
            detail: RoomDetail::Enemy(EnemyView::new(enemy.kind(), enemy.actor())),
        }
    }
}

struct RewardNames<'a> {
    items: &'a dyn ItemFactory,
}

impl RoomVisitor for RewardNames<'_> {
    type Output = Vec<String>;

    fn visit_enemy_room(&mut self, room: &EnemyRoom) -> Vec<String> {
        room.enemy()
            .rewards()
            .iter()
            .map(|kind| {
                self.items
                    .display_name(kind)
                    .map_or_else(|| kind.to_string(), str::to_owned)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Factories;

    #[test]
    fn captures_player_and_room() {
        let factories = Factories::standard();
        let player = factories.create_player();
        let map = Map::new(factories.create_room(&RoomKind::Enemy));

        let view = GameView::capture(1, &player, &map);
        assert_eq!(view.player.hp, 100);
        assert_eq!(view.player.item_count, 2);
        assert_eq!(view.room.name, "Enemy Room");
        assert_eq!(view.room.neighbor_count, 3);

        let RoomDetail::Enemy(enemy) = view.room.detail;
        assert_eq!(enemy.kind, EnemyKind::Goblin);
        assert_eq!(enemy.agility, 2);
    }

    #[test]
    fn cleared_view_names_rewards() {
        let factories = Factories::standard();
        let player = factories.create_player();
        let map = Map::new(factories.create_room(&RoomKind::Enemy));

        let cleared = ClearedView::capture(3, &player, &map, factories.items());
        assert_eq!(cleared.rewards, ["Health Potion"]);
    }
}
