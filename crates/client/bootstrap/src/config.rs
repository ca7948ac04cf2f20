//! Client runtime configuration and loaders.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration required to bootstrap a play session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory with `config.toml`, `items.ron` and `actors.ron`. Built-in
    /// presets are used when unset.
    pub data_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content data directory (default: built-in presets)
    /// - `GAME_SESSION_ID` - Session identifier used for log files (default: timestamp)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_dir: non_empty("CONTENT_DATA_DIR").map(PathBuf::from),
            session_id: non_empty("GAME_SESSION_ID"),
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Configured session id, or `session_<unix seconds>`.
    pub fn session_label(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{secs}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_known_variables() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("CONTENT_DATA_DIR", "/srv/dungeon"),
            ("GAME_SESSION_ID", "night-run"),
        ]));
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/dungeon")));
        assert_eq!(config.session_label(), "night-run");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = RuntimeConfig::from_lookup(lookup(&[("CONTENT_DATA_DIR", "  ")]));
        assert_eq!(config, RuntimeConfig::default());
        assert!(config.session_label().starts_with("session_"));
    }
}
