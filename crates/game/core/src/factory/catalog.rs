//! Preset catalogs the standard factories build from.
//!
//! The built-in catalogs reproduce the fixed content of the game. Content
//! loaders may replace them with data-driven catalogs of the same shape.

use crate::kinds::{EnemyKind, ItemKind};
use crate::state::CombatStats;

/// Effect parameters of an item preset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    Weapon { damage: i32 },
    Buff { verb: String, magnitude: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPreset {
    pub kind: ItemKind,
    pub name: String,
    pub single_use: bool,
    pub effect: ItemEffect,
}

impl ItemPreset {
    pub fn sword() -> Self {
        Self {
            kind: ItemKind::Sword,
            name: "Sword".into(),
            single_use: false,
            effect: ItemEffect::Weapon { damage: 3 },
        }
    }

    pub fn health_potion() -> Self {
        Self {
            kind: ItemKind::HealthPotion,
            name: "Health Potion".into(),
            single_use: true,
            effect: ItemEffect::Buff {
                verb: "Heal".into(),
                magnitude: 20,
            },
        }
    }
}

/// Item presets keyed by kind. The first preset of a kind wins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    pub items: Vec<ItemPreset>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemPreset>) -> Self {
        Self { items }
    }

    pub fn get(&self, kind: &ItemKind) -> Option<&ItemPreset> {
        self.items.iter().find(|preset| &preset.kind == kind)
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new(vec![ItemPreset::sword(), ItemPreset::health_potion()])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerPreset {
    pub name: String,
    pub hp: i32,
    pub stats: CombatStats,
    pub starter_items: Vec<ItemKind>,
}

impl Default for PlayerPreset {
    fn default() -> Self {
        Self {
            name: "Player".into(),
            hp: 100,
            stats: CombatStats::new(1, 1, 1),
            starter_items: vec![ItemKind::Sword, ItemKind::HealthPotion],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyPreset {
    pub kind: EnemyKind,
    pub name: String,
    pub hp: i32,
    pub stats: CombatStats,
    pub starter_items: Vec<ItemKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rewards: Vec<ItemKind>,
}

impl EnemyPreset {
    pub fn goblin() -> Self {
        Self {
            kind: EnemyKind::Goblin,
            name: "Goblin".into(),
            hp: 10,
            stats: CombatStats::new(1, 1, 2),
            starter_items: vec![ItemKind::Sword],
            rewards: vec![ItemKind::HealthPotion],
        }
    }
}

/// Player and enemy presets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorCatalog {
    pub player: PlayerPreset,
    pub enemies: Vec<EnemyPreset>,
}

impl ActorCatalog {
    /// Preset for `kind`, falling back to the Goblin preset for kinds the
    /// catalog does not define.
    pub fn enemy(&self, kind: &EnemyKind) -> EnemyPreset {
        self.enemies
            .iter()
            .find(|preset| &preset.kind == kind)
            .or_else(|| {
                self.enemies
                    .iter()
                    .find(|preset| preset.kind == EnemyKind::Goblin)
            })
            .cloned()
            .unwrap_or_else(EnemyPreset::goblin)
    }
}

impl Default for ActorCatalog {
    fn default() -> Self {
        Self {
            player: PlayerPreset::default(),
            enemies: vec![EnemyPreset::goblin()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_enemy_falls_back_to_goblin() {
        let catalog = ActorCatalog::default();
        let preset = catalog.enemy(&EnemyKind::from_text("Dragon"));
        assert_eq!(preset, EnemyPreset::goblin());
    }

    #[test]
    fn empty_enemy_list_still_yields_goblin() {
        let catalog = ActorCatalog {
            player: PlayerPreset::default(),
            enemies: Vec::new(),
        };
        assert_eq!(catalog.enemy(&EnemyKind::Goblin).hp, 10);
    }
}
