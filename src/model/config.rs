use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line at the bottom of the screen
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `background = "#EBEBEB"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log file. Logging is off when unset, the terminal is ours.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default filter directive; `RUST_LOG` wins when set
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}
