use crate::factory::{ActorCatalog, ActorFactory, ItemFactory};
use crate::kinds::{EnemyKind, ItemKind};
use crate::state::{Actor, Enemy, Player};

/// Actor factory backed by an [`ActorCatalog`].
#[derive(Clone, Debug, Default)]
pub struct StandardActorFactory {
    catalog: ActorCatalog,
}

impl StandardActorFactory {
    pub fn new(catalog: ActorCatalog) -> Self {
        Self { catalog }
    }
}

impl ActorFactory for StandardActorFactory {
    fn create_enemy(&self, kind: &EnemyKind, items: &dyn ItemFactory) -> Enemy {
        let preset = self.catalog.enemy(kind);
        let actor = equip(
            Actor::new(preset.name, preset.hp, preset.stats),
            &preset.starter_items,
            items,
        );
        Enemy::new(actor, preset.kind, preset.rewards)
    }

    fn create_player(&self, items: &dyn ItemFactory) -> Player {
        let preset = &self.catalog.player;
        let actor = equip(
            Actor::new(preset.name.clone(), preset.hp, preset.stats),
            &preset.starter_items,
            items,
        );
        Player::new(actor)
    }
}

fn equip(mut actor: Actor, starter_items: &[ItemKind], items: &dyn ItemFactory) -> Actor {
    for kind in starter_items {
        // Unknown starter kinds are skipped by the item factory.
        items.create_and_store_item(actor.inventory_mut(), kind);
    }
    actor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::StandardItemFactory;
    use crate::state::{CombatStats, Combatant};

    #[test]
    fn goblin_preset() {
        let items = StandardItemFactory::default();
        let goblin = StandardActorFactory::default().create_enemy(&EnemyKind::Goblin, &items);

        let actor = goblin.actor();
        assert_eq!(actor.name(), "Goblin");
        assert_eq!(actor.hp(), 10);
        assert_eq!(actor.stats(), CombatStats::new(1, 1, 2));
        assert_eq!(actor.inventory().weapons().len(), 1);
        assert!(actor.inventory().buffs().is_empty());
        assert_eq!(goblin.rewards(), &[ItemKind::HealthPotion]);
    }

    #[test]
    fn player_preset() {
        let items = StandardItemFactory::default();
        let player = StandardActorFactory::default().create_player(&items);

        let actor = player.actor();
        assert_eq!(actor.hp(), 100);
        assert_eq!(actor.stats(), CombatStats::new(1, 1, 1));
        assert_eq!(actor.inventory().count_of(&ItemKind::Sword), 1);
        assert_eq!(actor.inventory().count_of(&ItemKind::HealthPotion), 1);
    }

    #[test]
    fn unknown_enemy_becomes_goblin() {
        let items = StandardItemFactory::default();
        let enemy = StandardActorFactory::default().create_enemy(&EnemyKind::from_text("Troll"), &items);
        assert_eq!(enemy.kind(), &EnemyKind::Goblin);
        assert_eq!(enemy.actor().hp(), 10);
    }
}
