//! CLI-specific configuration for the console frontend.
use std::env;

/// Console presentation settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Style output with ANSI colors.
    pub color: bool,
    /// Print enemy ASCII art with each round.
    pub show_art: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_art: true,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_COLOR` - Colored output (default: true)
    /// - `CLI_SHOW_ART` - Enemy ASCII art (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(color) = read_env::<bool>(&lookup, "CLI_COLOR") {
            config.color = color;
        }
        if let Some(show_art) = read_env::<bool>(&lookup, "CLI_SHOW_ART") {
            config.show_art = show_art;
        }

        config
    }

    pub fn plain() -> Self {
        Self {
            color: false,
            show_art: false,
        }
    }
}

fn read_env<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
