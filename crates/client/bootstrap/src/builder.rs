//! Builds the game config and factories bundle used by front-ends.
use anyhow::{Context, Result};
use game_content::ContentFactory;
use game_core::{Factories, GameConfig};
use runtime::RuntimeBuilder;

use crate::config::RuntimeConfig;

/// Builder that assembles content and configuration for a play session.
#[derive(Debug, Default)]
pub struct SessionBuilder {
    config: RuntimeConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<SessionSetup> {
        let (game_config, factories) = match &self.config.data_dir {
            Some(dir) => {
                tracing::info!("Loading content from {}", dir.display());
                ContentFactory::new(dir)
                    .load_factories()
                    .with_context(|| format!("failed to load content from {}", dir.display()))?
            }
            None => {
                tracing::info!("Using built-in content presets");
                (GameConfig::default(), Factories::standard())
            }
        };

        tracing::debug!(
            starting_room = %game_config.starting_room,
            enemy_spawn = %game_config.enemy_spawn,
            "session content ready"
        );

        Ok(SessionSetup {
            config: self.config,
            game_config,
            factories,
        })
    }
}

#[derive(Debug)]
pub struct SessionSetup {
    pub config: RuntimeConfig,
    pub game_config: GameConfig,
    pub factories: Factories,
}

impl SessionSetup {
    /// Runtime builder seeded with this session's config and factories.
    ///
    /// The caller still provides a renderer and an input source.
    pub fn runtime_builder(self) -> RuntimeBuilder {
        runtime::Runtime::builder()
            .config(self.game_config)
            .factories(self.factories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Combatant, EnemyKind, RoomKind};

    #[test]
    fn defaults_to_built_in_presets() {
        let setup = SessionBuilder::new().build().unwrap();
        assert_eq!(setup.game_config, GameConfig::default());
        assert_eq!(setup.factories.create_player().actor().hp(), 100);
    }

    #[test]
    fn loads_bundled_content() {
        let config = RuntimeConfig::default().with_data_dir(game_content::bundled_data_dir());
        let setup = SessionBuilder::new().config(config).build().unwrap();

        assert_eq!(setup.game_config.starting_room, RoomKind::Enemy);
        assert_eq!(setup.game_config.enemy_spawn, EnemyKind::Goblin);
        let goblin = setup.factories.create_enemy(&EnemyKind::Goblin);
        assert_eq!(goblin.actor().hp(), 10);
    }

    #[test]
    fn missing_content_is_reported() {
        let config = RuntimeConfig::default().with_data_dir("/nonexistent/dungeon-data");
        let err = SessionBuilder::new().config(config).build().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/dungeon-data"));
    }
}
