//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Item catalog (`items.ron`)
//! - Player and enemy presets (`actors.ron`)
//! - Game configuration (`config.toml`)
//!
//! The shipped `data/` directory reproduces the built-in presets of
//! `game-core`, so loading it yields the same game as the defaults.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod loaders;

pub use loaders::{ActorLoader, ConfigLoader, ContentFactory, ItemLoader, LoadResult};

/// Directory holding the data files shipped with this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
