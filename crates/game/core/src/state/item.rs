//! Item types.
//!
//! Items come in two capabilities:
//! - [`Weapon`]: deals `base_damage + user.agility + user.strength` to a target
//! - [`ActiveBuff`]: adds a fixed magnitude to its target's hp
//!
//! Both are configured once at creation; the only state they carry is their
//! display data and effect parameters.

use crate::kinds::ItemKind;
use crate::state::Actor;

/// Collection an item is stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum ItemCategory {
    Weapon,
    ActiveBuff,
}

/// Behavior shared by every item.
pub trait Item {
    fn name(&self) -> &str;

    /// Kind tag used for lookup and removal.
    fn kind(&self) -> &ItemKind;

    fn is_single_use(&self) -> bool;

    fn category(&self) -> ItemCategory;

    /// Text shown for this item in an action menu.
    fn action_label(&self) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Weapon {
    kind: ItemKind,
    name: String,
    base_damage: i32,
    single_use: bool,
}

impl Weapon {
    pub fn new(kind: ItemKind, name: impl Into<String>, base_damage: i32, single_use: bool) -> Self {
        Self {
            kind,
            name: name.into(),
            base_damage,
            single_use,
        }
    }

    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    /// Damage this weapon deals when wielded by `user`.
    ///
    /// ```text
    /// damage = base_damage + user.agility + user.strength
    /// ```
    ///
    /// The target has no say: there are no resistances or misses.
    pub fn expected_damage(&self, user: &Actor) -> i32 {
        self.base_damage
            .saturating_add(user.agility())
            .saturating_add(user.strength())
    }

    /// Applies [`expected_damage`](Self::expected_damage) to `target`.
    ///
    /// Returns the damage dealt.
    pub fn apply_damage(&self, user: &Actor, target: &mut Actor) -> i32 {
        let damage = self.expected_damage(user);
        target.take_damage(damage);
        damage
    }
}

impl Item for Weapon {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &ItemKind {
        &self.kind
    }

    fn is_single_use(&self) -> bool {
        self.single_use
    }

    fn category(&self) -> ItemCategory {
        ItemCategory::Weapon
    }

    fn action_label(&self) -> String {
        format!("Attack ({})", self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveBuff {
    kind: ItemKind,
    name: String,
    verb: String,
    magnitude: i32,
    single_use: bool,
}

impl ActiveBuff {
    pub fn new(
        kind: ItemKind,
        name: impl Into<String>,
        verb: impl Into<String>,
        magnitude: i32,
        single_use: bool,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            verb: verb.into(),
            magnitude,
            single_use,
        }
    }

    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }

    /// Verb describing the effect, e.g. "Heal".
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Adds the magnitude to `target`'s hp, uncapped. Returns the amount added.
    pub fn apply_buff(&self, target: &mut Actor) -> i32 {
        target.restore(self.magnitude);
        self.magnitude
    }
}

impl Item for ActiveBuff {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &ItemKind {
        &self.kind
    }

    fn is_single_use(&self) -> bool {
        self.single_use
    }

    fn category(&self) -> ItemCategory {
        ItemCategory::ActiveBuff
    }

    fn action_label(&self) -> String {
        format!("{} ({})", self.verb, self.name)
    }
}
