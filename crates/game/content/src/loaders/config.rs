//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EnemyKind, RoomKind};

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("enemy_spawn = \"Orc\"").unwrap();
        assert_eq!(config.starting_room, RoomKind::Enemy);
        assert_eq!(config.enemy_spawn, EnemyKind::Unknown("Orc".into()));
    }
}
