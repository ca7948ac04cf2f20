//! Glue code tying the session setup and the console together.
use std::io;

use anyhow::Result;
use client_bootstrap::SessionSetup;
use runtime::GameStatus;

use crate::config::CliConfig;
use crate::input::LineInput;
use crate::render::ConsoleRenderer;

pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Plays a session on stdin/stdout until the player quits or loses.
    pub fn run(self, setup: SessionSetup) -> Result<GameStatus> {
        tracing::info!(session = %setup.config.session_label(), "starting console session");

        let mut runtime = setup
            .runtime_builder()
            .renderer(ConsoleRenderer::new(io::stdout(), self.config))
            .input(LineInput::new(io::stdin().lock(), io::stdout()))
            .build()?;

        let status = runtime.run()?;
        tracing::info!(
            %status,
            rounds = runtime.round(),
            rooms_cleared = runtime.rooms_cleared(),
            "console session ended"
        );
        Ok(status)
    }
}
