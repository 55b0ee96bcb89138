//! TUI configuration persistence
//!
//! Saves and loads user preferences such as the local display name, theme and
//! translation bundle.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "remote-control-tui";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Name shown for the local participant
    #[serde(default = "default_display_name")]
    pub local_display_name: String,

    /// Use the high contrast palette
    #[serde(default)]
    pub high_contrast: bool,

    /// Extra translation bundle merged over the built-in strings
    #[serde(default)]
    pub translations: Option<PathBuf>,

    /// Frame/tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Where log output goes (logging is discarded when unset)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_display_name() -> String {
    "Me".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            local_display_name: default_display_name(),
            high_contrast: false,
            translations: None,
            tick_rate_ms: default_tick_rate_ms(),
            log_file: None,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
            return Some(path);
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location
    pub fn try_load() -> Result<Self, ConfigError> {
        match Self::config_file_path() {
            Some(path) => Self::try_load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error, so the caller decides when and where to report it.
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config file: {}", e);
            Self::default()
        })
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.local_display_name, "Me");
        assert!(!config.high_contrast);
        assert!(config.translations.is_none());
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = TuiConfig {
            local_display_name: "Bob".to_string(),
            high_contrast: true,
            translations: Some(PathBuf::from("/etc/remote-control/de.json")),
            tick_rate_ms: 250,
            log_file: None,
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path);
        assert_eq!(loaded.local_display_name, "Bob");
        assert!(loaded.high_contrast);
        assert_eq!(
            loaded.translations,
            Some(PathBuf::from("/etc/remote-control/de.json"))
        );
        assert_eq!(loaded.tick_rate_ms, 250);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: TuiConfig = serde_json::from_str(r#"{"high_contrast": true}"#).unwrap();
        assert_eq!(config.local_display_name, "Me");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let config = TuiConfig::load_from(&path);
        assert_eq!(config.local_display_name, "Me");
    }

    #[test]
    fn test_unparsable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"tick_rate_ms": "fast"}"#).unwrap();

        let err = TuiConfig::try_load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::try_load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
    }
}
