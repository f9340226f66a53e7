//! Logging setup.
//!
//! Human-readable logs go to stderr so stdout stays clean for reports.
//! JSONL file logs are written only when a log path or directory is set.
//!
//! Filter precedence: `RUST_LOG`, then `-q`/`-v`, then the configured level.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_ENV: &str = "READSCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "READSCORE_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "readscore.jsonl";

/// Where file logs should go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file path. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory that receives `readscore.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `READSCORE_LOG_PATH` / `READSCORE_LOG_DIR`, falling back to the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_values(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn from_values(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_path,
            log_dir: env_dir.or(config_log_dir),
        }
    }

    /// Resolve to a directory and file name, or `None` when file logging is off.
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), DEFAULT_LOG_FILE.to_string()))
    }
}

/// Build the log filter from `RUST_LOG` or the CLI flags and config level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered file logs are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(true, 2, "info"), "error");
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(false, 0, "warn"), "warn");
        assert_eq!(level_for(false, 1, "warn"), "debug");
        assert_eq!(level_for(false, 3, "warn"), "trace");
    }

    #[test]
    fn env_dir_overrides_config_dir() {
        let config = ObservabilityConfig::from_values(
            None,
            Some(PathBuf::from("/env/logs")),
            Some(PathBuf::from("/config/logs")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/env/logs")));
    }

    #[test]
    fn log_path_wins_over_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/var/log/custom.jsonl")),
            log_dir: Some(PathBuf::from("/ignored")),
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/var/log"), "custom.jsonl".to_string()))
        );
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("run.jsonl")),
            log_dir: None,
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("."), "run.jsonl".to_string()))
        );
    }

    #[test]
    fn no_file_logging_by_default() {
        assert!(ObservabilityConfig::default().log_file().is_none());
    }
}
