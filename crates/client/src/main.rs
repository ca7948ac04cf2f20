//! Dungeon game client binary.
//!
//! This binary is the composition root: it loads configuration, sets up
//! logging, assembles the session content and hands it to the console
//! frontend.
//!
//! ```bash
//! # Built-in presets
//! cargo run -p dungeon-client
//!
//! # Content from data files, no colors
//! CONTENT_DATA_DIR=crates/game/content/data CLI_COLOR=false cargo run -p dungeon-client
//! ```

use anyhow::Result;
use client_bootstrap::{RuntimeConfig, SessionBuilder};
use client_frontend_cli::{CliConfig, CliFrontend, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(&runtime_config.session_label())?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("Content directory: {:?}", runtime_config.data_dir);

    // 3. Assemble content
    let setup = SessionBuilder::new().config(runtime_config).build()?;

    // 4. Play
    let status = CliFrontend::new(cli_config).run(setup)?;

    tracing::info!("Client shutdown complete: {}", status);
    Ok(())
}
