use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::model::config::LogConfig;

/// Error type for setting up the log file
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError { path: PathBuf, source: io::Error },
    #[error("invalid log level \"{0}\"")]
    InvalidLevel(String),
    #[error("a global log subscriber is already installed")]
    AlreadyInstalled,
}

/// `RUST_LOG` when set, otherwise the configured level
pub fn build_filter(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|_| LogError::InvalidLevel(level.to_string()))
}

/// Install the global subscriber writing to the log file. The terminal
/// belongs to the TUI, so with no file configured nothing is installed and
/// `Ok(false)` comes back.
pub fn install_logging(config: &LogConfig, file_override: Option<&Path>) -> Result<bool, LogError> {
    let Some(path) = file_override.or(config.file.as_deref()) else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })?;
    let filter = build_filter(&config.level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(Mutex::new(file))
        .compact()
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_file_means_no_subscriber() {
        let config = LogConfig::default();
        assert!(!install_logging(&config, None).unwrap());
    }

    #[test]
    fn override_path_wins_and_installs_once() {
        let tmp = TempDir::new().unwrap();
        let configured = tmp.path().join("configured.log");
        let flag = tmp.path().join("flag.log");
        let config = LogConfig {
            file: Some(configured.clone()),
            level: "debug".into(),
        };
        assert!(install_logging(&config, Some(&flag)).unwrap());
        assert!(flag.exists());
        assert!(!configured.exists());

        // The global subscriber can only be set once per process
        let err = install_logging(&config, Some(&flag)).unwrap_err();
        assert!(matches!(err, LogError::AlreadyInstalled));
    }

    #[test]
    fn unopenable_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("x.log");
        let err = install_logging(&LogConfig::default(), Some(&path)).unwrap_err();
        assert!(matches!(err, LogError::OpenError { .. }));
    }

    #[test]
    fn plain_level_parses() {
        assert!(build_filter("info").is_ok());
    }
}
