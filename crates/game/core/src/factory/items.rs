use crate::factory::{ItemCatalog, ItemEffect, ItemFactory};
use crate::kinds::ItemKind;
use crate::state::{ActiveBuff, Inventory, Weapon};

/// Item factory backed by an [`ItemCatalog`].
#[derive(Clone, Debug, Default)]
pub struct StandardItemFactory {
    catalog: ItemCatalog,
}

impl StandardItemFactory {
    pub fn new(catalog: ItemCatalog) -> Self {
        Self { catalog }
    }
}

impl ItemFactory for StandardItemFactory {
    fn create_and_store_item(&self, inventory: &mut Inventory, kind: &ItemKind) -> bool {
        let Some(preset) = self.catalog.get(kind) else {
            return false;
        };

        match &preset.effect {
            ItemEffect::Weapon { damage } => inventory.add_weapon(Weapon::new(
                preset.kind.clone(),
                preset.name.clone(),
                *damage,
                preset.single_use,
            )),
            ItemEffect::Buff { verb, magnitude } => inventory.add_buff(ActiveBuff::new(
                preset.kind.clone(),
                preset.name.clone(),
                verb.clone(),
                *magnitude,
                preset.single_use,
            )),
        }
        true
    }

    fn display_name(&self, kind: &ItemKind) -> Option<&str> {
        self.catalog.get(kind).map(|preset| preset.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Item;

    #[test]
    fn builds_builtin_items() {
        let factory = StandardItemFactory::default();
        let mut inventory = Inventory::new();

        assert!(factory.create_and_store_item(&mut inventory, &ItemKind::Sword));
        assert!(factory.create_and_store_item(&mut inventory, &ItemKind::HealthPotion));

        let sword = &inventory.weapons()[0];
        assert_eq!(sword.base_damage(), 3);
        assert!(!sword.is_single_use());

        let potion = &inventory.buffs()[0];
        assert_eq!(potion.magnitude(), 20);
        assert_eq!(potion.verb(), "Heal");
        assert!(potion.is_single_use());
    }

    #[test]
    fn unknown_kind_is_a_noop() {
        let factory = StandardItemFactory::default();
        let mut inventory = Inventory::new();

        assert!(!factory.create_and_store_item(&mut inventory, &ItemKind::from_text("Axe")));
        assert!(inventory.is_empty());
        assert_eq!(factory.display_name(&ItemKind::from_text("Axe")), None);
        assert_eq!(factory.display_name(&ItemKind::HealthPotion), Some("Health Potion"));
    }
}
