//! The 1-indexed action menu built from an inventory.

use crate::combat::SelectionError;
use crate::state::{Inventory, Item};

/// Position of a usable item inside its inventory collection (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionSlot {
    Weapon(usize),
    Buff(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// 1-based position shown to the player.
    pub index: usize,
    pub label: String,
    pub slot: ActionSlot,
}

/// Weapons in acquisition order, then buffs in acquisition order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionMenu {
    entries: Vec<MenuEntry>,
}

impl ActionMenu {
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let weapons = inventory
            .weapons()
            .iter()
            .enumerate()
            .map(|(i, weapon)| (weapon.action_label(), ActionSlot::Weapon(i)));
        let buffs = inventory
            .buffs()
            .iter()
            .enumerate()
            .map(|(i, buff)| (buff.action_label(), ActionSlot::Buff(i)));

        let entries = weapons
            .chain(buffs)
            .enumerate()
            .map(|(i, (label, slot))| MenuEntry {
                index: i + 1,
                label,
                slot,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a 1-based menu index.
    pub fn select(&self, index: usize) -> Result<ActionSlot, SelectionError> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|entry| entry.slot)
            .ok_or(SelectionError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Parses raw player input and resolves it. Nothing is ever defaulted.
    pub fn parse(&self, input: &str) -> Result<ActionSlot, SelectionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectionError::Empty);
        }
        let index = trimmed
            .parse::<usize>()
            .map_err(|_| SelectionError::NotANumber {
                input: trimmed.to_owned(),
            })?;
        self.select(index)
    }
}
