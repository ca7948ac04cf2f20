//! Item catalog loader.

use std::path::Path;

use game_core::ItemCatalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ItemEffect, ItemKind};

    #[test]
    fn parses_custom_kinds() {
        let catalog = ItemLoader::parse(
            r#"(items: [(kind: "Axe", name: "Axe", single_use: false, effect: Weapon(damage: 5))])"#,
        )
        .unwrap();

        let axe = catalog.get(&ItemKind::from_text("Axe")).unwrap();
        assert_eq!(axe.effect, ItemEffect::Weapon { damage: 5 });
    }

    #[test]
    fn rejects_malformed_catalog() {
        assert!(ItemLoader::parse("(items: [(kind: 3)])").is_err());
    }
}
