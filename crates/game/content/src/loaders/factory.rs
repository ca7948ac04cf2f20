//! Content factory for building game factories from data files.

use std::path::{Path, PathBuf};

use game_core::{ActorCatalog, Factories, GameConfig, ItemCatalog};

use crate::loaders::{ActorLoader, ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── actors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load player and enemy presets from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<ActorCatalog> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load everything and assemble the standard factories over it.
    pub fn load_factories(&self) -> LoadResult<(GameConfig, Factories)> {
        let config = self.load_config()?;
        let factories = Factories::from_catalogs(self.load_items()?, self.load_actors()?, &config);
        Ok((config, factories))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_directory_reports_the_path() {
        let factory = ContentFactory::new("/nonexistent/dungeon-data");
        let err = factory.load_items().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dungeon-data/items.ron"));
    }
}
