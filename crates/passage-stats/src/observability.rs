//! Logging setup: an `EnvFilter`-gated stderr layer plus an optional
//! non-blocking file layer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "PASSAGE_STATS_LOG_PATH";
const LOG_DIR_ENV: &str = "PASSAGE_STATS_LOG_DIR";
const LOG_FILE_NAME: &str = "passage-stats.log";

/// Where (if anywhere) log lines are written besides stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory receiving `passage-stats.log`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to `config_log_dir` for the directory.
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
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_path,
            log_dir: env_dir.or(config_dir),
        }
    }

    /// Split the configured target into a directory and file name.
    fn file_target(&self) -> Option<(PathBuf, PathBuf)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path.file_name()?;
            return Some((dir, PathBuf::from(name)));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), PathBuf::from(LOG_FILE_NAME)))
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins; otherwise `-q` forces errors only, `-v`/`-vv` raise to
/// debug/trace, and the configured level applies when neither is given.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(filter_directive(quiet, verbose, default_level))
}

fn filter_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
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
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.file_target() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
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
    fn quiet_beats_verbose() {
        assert_eq!(filter_directive(true, 2, "info"), "error");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_directive(false, 0, "warn"), "warn");
        assert_eq!(filter_directive(false, 1, "warn"), "debug");
        assert_eq!(filter_directive(false, 3, "warn"), "trace");
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::from_values(
            None,
            Some(PathBuf::from("/env")),
            Some(PathBuf::from("/config")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/env")));
    }

    #[test]
    fn log_path_splits_into_dir_and_name() {
        let config = ObservabilityConfig::from_values(
            Some(PathBuf::from("/var/log/stats.log")),
            Some(PathBuf::from("/ignored")),
            None,
        );
        assert_eq!(
            config.file_target(),
            Some((PathBuf::from("/var/log"), PathBuf::from("stats.log")))
        );
    }

    #[test]
    fn bare_file_name_logs_to_cwd() {
        let config = ObservabilityConfig::from_values(Some(PathBuf::from("x.log")), None, None);
        assert_eq!(
            config.file_target(),
            Some((PathBuf::from("."), PathBuf::from("x.log")))
        );
    }

    #[test]
    fn log_dir_uses_default_file_name() {
        let config = ObservabilityConfig::from_values(None, None, Some(PathBuf::from("/logs")));
        assert_eq!(
            config.file_target(),
            Some((PathBuf::from("/logs"), PathBuf::from(LOG_FILE_NAME)))
        );
    }

    #[test]
    fn no_target_without_settings() {
        assert!(ObservabilityConfig::default().file_target().is_none());
    }
}
