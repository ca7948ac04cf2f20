//! Kind tags for items, enemies and rooms.
//!
//! Kinds are the lookup keys factories build from. They parse from text
//! case-insensitively, and names that match no known variant are kept in an
//! `Unknown` variant so factories can apply their fallback rules instead of
//! failing at parse time.

use core::fmt;

/// Item kind tag used for factory lookup and inventory removal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
#[strum(ascii_case_insensitive)]
pub enum ItemKind {
    /// Reusable melee weapon.
    Sword,
    /// Single-use healing buff.
    HealthPotion,
    /// Any name the built-in set does not know about.
    #[strum(default)]
    Unknown(String),
}

impl ItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sword => "Sword",
            Self::HealthPotion => "HealthPotion",
            Self::Unknown(name) => name,
        }
    }
}

/// Enemy kind tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
#[strum(ascii_case_insensitive)]
pub enum EnemyKind {
    #[default]
    Goblin,
    #[strum(default)]
    Unknown(String),
}

impl EnemyKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Goblin => "Goblin",
            Self::Unknown(name) => name,
        }
    }
}

/// Room kind tag. Neighbor slots hold these to describe reachable rooms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
#[strum(ascii_case_insensitive)]
pub enum RoomKind {
    /// Encounter room holding a single enemy.
    #[default]
    Enemy,
    #[strum(default)]
    Unknown(String),
}

impl RoomKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enemy => "Enemy",
            Self::Unknown(name) => name,
        }
    }

    /// Returns true if this kind is not one of the built-in room kinds.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

macro_rules! impl_kind_text {
    ($($kind:ident),+ $(,)?) => {
        $(
            impl $kind {
                /// Parses a kind name, keeping names no variant matches.
                pub fn from_text(value: &str) -> Self {
                    value
                        .trim()
                        .parse()
                        .unwrap_or_else(|_| Self::Unknown(value.to_owned()))
                }
            }

            impl From<String> for $kind {
                fn from(value: String) -> Self {
                    Self::from_text(&value)
                }
            }

            impl From<$kind> for String {
                fn from(kind: $kind) -> Self {
                    kind.as_str().to_owned()
                }
            }

            impl fmt::Display for $kind {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_kind_text!(ItemKind, EnemyKind, RoomKind);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds_case_insensitively() {
        assert_eq!(ItemKind::from_text("sword"), ItemKind::Sword);
        assert_eq!(ItemKind::from_text("HEALTHPOTION"), ItemKind::HealthPotion);
        assert_eq!(EnemyKind::from_text("Goblin"), EnemyKind::Goblin);
        assert_eq!(RoomKind::from_text(" enemy "), RoomKind::Enemy);
    }

    #[test]
    fn keeps_unknown_names() {
        let kind = ItemKind::from_text("Axe");
        assert_eq!(kind, ItemKind::Unknown("Axe".into()));
        assert_eq!(kind.to_string(), "Axe");
        assert!(RoomKind::from_text("Shop").is_unknown());
    }

    #[test]
    fn owned_text_and_parse_agree() {
        assert_eq!(EnemyKind::from(String::from(" goblin")), EnemyKind::Goblin);
        assert_eq!("Treasury".parse::<RoomKind>(), Ok(RoomKind::Unknown("Treasury".into())));
        assert_eq!(ItemKind::from(String::from("Axe")), ItemKind::from_text("Axe"));
    }

    #[test]
    fn displays_canonical_names() {
        assert_eq!(ItemKind::HealthPotion.to_string(), "HealthPotion");
        assert_eq!(String::from(RoomKind::Enemy), "Enemy");
    }
}
