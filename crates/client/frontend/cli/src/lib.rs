//! Console frontend for the dungeon crawl.
//!
//! Renders each round as plain text (optionally colored, with enemy ASCII
//! art) and reads the player's answers line by line.

mod app;
mod art;
mod config;
mod input;
pub mod logging;
mod render;
mod theme;

pub use app::CliFrontend;
pub use config::CliConfig;
pub use input::LineInput;
pub use render::ConsoleRenderer;
