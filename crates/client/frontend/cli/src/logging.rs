//! File-only tracing setup so log lines never mix with game output.
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const FALLBACK_LOG_DIR: &str = "/tmp/dungeon/logs";

/// Installs the global subscriber writing to `<log dir>/<session_id>/client.log`.
///
/// The filter comes from `RUST_LOG`, or `info` when it is unset or invalid.
/// Keep the returned guard alive for the whole session or buffered lines are lost.
pub fn setup_logging(session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_directory().join(session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = session_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs, or a fixed temp path without a home.
pub fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_DIR))
}

fn session_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn rust_log_can_lower_the_level() {
        let filter = session_filter(Some("debug".to_owned()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn info_without_usable_directives() {
        assert_eq!(session_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            session_filter(Some("dungeon=loud".to_owned())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
