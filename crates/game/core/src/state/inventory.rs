//! Inventory system for actors.

use crate::kinds::ItemKind;
use crate::state::{ActiveBuff, Item, ItemCategory, Weapon};

/// Items owned by a single actor, kept in acquisition order per category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    weapons: Vec<Weapon>,
    buffs: Vec<ActiveBuff>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    pub fn add_buff(&mut self, buff: ActiveBuff) {
        self.buffs.push(buff);
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn buffs(&self) -> &[ActiveBuff] {
        &self.buffs
    }

    pub fn total_items(&self) -> usize {
        self.weapons.len() + self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    /// Number of items of `kind` across both categories.
    pub fn count_of(&self, kind: &ItemKind) -> usize {
        let weapons = self.weapons.iter().filter(|w| w.kind() == kind).count();
        let buffs = self.buffs.iter().filter(|b| b.kind() == kind).count();
        weapons + buffs
    }

    /// Removes the first item in `category` whose kind and name both match.
    ///
    /// Returns `false` and leaves the inventory untouched when nothing matches.
    pub fn remove(&mut self, category: ItemCategory, kind: &ItemKind, name: &str) -> bool {
        match category {
            ItemCategory::Weapon => remove_first(&mut self.weapons, kind, name),
            ItemCategory::ActiveBuff => remove_first(&mut self.buffs, kind, name),
        }
    }
}

fn remove_first<T: Item>(items: &mut Vec<T>, kind: &ItemKind, name: &str) -> bool {
    match items
        .iter()
        .position(|item| item.kind() == kind && item.name() == name)
    {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potion() -> ActiveBuff {
        ActiveBuff::new(ItemKind::HealthPotion, "Health Potion", "Heal", 20, true)
    }

    #[test]
    fn removes_only_first_match() {
        let mut inventory = Inventory::new();
        inventory.add_weapon(Weapon::new(ItemKind::Sword, "Sword", 3, false));
        inventory.add_buff(potion());
        inventory.add_buff(potion());
        assert_eq!(inventory.total_items(), 3);

        assert!(inventory.remove(ItemCategory::ActiveBuff, &ItemKind::HealthPotion, "Health Potion"));
        assert_eq!(inventory.total_items(), 2);
        assert_eq!(inventory.count_of(&ItemKind::HealthPotion), 1);
    }

    #[test]
    fn unmatched_removal_is_a_noop() {
        let mut inventory = Inventory::new();
        inventory.add_buff(potion());

        // Right name, wrong collection.
        assert!(!inventory.remove(ItemCategory::Weapon, &ItemKind::HealthPotion, "Health Potion"));
        // Right kind, wrong name.
        assert!(!inventory.remove(ItemCategory::ActiveBuff, &ItemKind::HealthPotion, "Elixir"));
        assert_eq!(inventory.total_items(), 1);
    }
}
