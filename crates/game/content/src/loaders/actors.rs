//! Actor catalog loader.
//!
//! Loads the player preset and every enemy preset from a single RON file.

use std::path::Path;

use game_core::ActorCatalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor catalog from a RON file.
    ///
    /// Enemy presets without a `rewards` field drop nothing.
    pub fn load(path: &Path) -> LoadResult<ActorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ActorCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))
    }
}
