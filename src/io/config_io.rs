use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Error type for reading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// `<config dir>/ticklist/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ticklist").join("config.toml"))
}

/// Load the config. An explicit path must exist; the default path is
/// optional and falls back to built-in defaults when missing.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(AppConfig::default()),
        },
    }
}

/// Parse a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r##"[ui]
show_key_hints = false

[ui.colors]
background = "#EBEBEB"

[log]
file = "/tmp/ticklist.log"
level = "debug"
"##,
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#EBEBEB")
        );
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/ticklist.log")));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[ui\nshow_key_hints = ").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
