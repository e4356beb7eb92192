//! Configuration management module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Longest delay accepted for any simulated timer.
const MAX_DELAY_MS: u64 = 60_000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timing: TimingConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Simulated latency settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay before a dispatched action completes.
    pub action_delay_ms: u64,
    /// How long a notification stays on screen.
    pub notification_ttl_ms: u64,
}

/// Main window geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_enabled: bool,
    /// Log directory; the platform data dir is used when unset.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Get config file path (same directory as executable).
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => ConfigLoadResult::Loaded(config),
                Err(e) => ConfigLoadResult::Invalid(e),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.action_delay_ms == 0 || self.timing.action_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "Action delay must be between 1 and {MAX_DELAY_MS} ms"
            )));
        }
        if self.timing.notification_ttl_ms == 0 || self.timing.notification_ttl_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "Notification lifetime must be between 1 and {MAX_DELAY_MS} ms"
            )));
        }
        if self.window.min_width <= 0.0 || self.window.min_height <= 0.0 {
            return Err(ConfigError::Validation(
                "Minimum window size must be greater than 0".to_string(),
            ));
        }
        if self.window.width < self.window.min_width || self.window.height < self.window.min_height {
            return Err(ConfigError::Validation(
                "Window size cannot be smaller than the minimum size".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl TimingConfig {
    pub fn action_delay(&self) -> Duration {
        Duration::from_millis(self.action_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

impl LoggingConfig {
    /// Resolve the directory log files are written to.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.directory {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "bookstore-dashboard")
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            action_delay_ms: 800,
            notification_ttl_ms: 3000,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            min_width: 900.0,
            min_height: 600.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.action_delay(), Duration::from_millis(800));
        assert_eq!(config.timing.notification_ttl(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml("[timing]\naction_delay_ms = 250\n").unwrap();
        assert_eq!(config.timing.action_delay_ms, 250);
        assert_eq!(config.timing.notification_ttl_ms, 3000);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_validation_zero_delay() {
        let mut config = AppConfig::default();
        config.timing.action_delay_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_delay_upper_bound() {
        let mut config = AppConfig::default();
        config.timing.notification_ttl_ms = MAX_DELAY_MS + 1;
        assert!(config.validate().is_err());

        config.timing.notification_ttl_ms = MAX_DELAY_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_window_below_minimum() {
        let mut config = AppConfig::default();
        config.window.width = 800.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = AppConfig::from_toml("[timing\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_explicit_log_dir_wins() {
        let logging = LoggingConfig {
            directory: Some(PathBuf::from("/tmp/bookstore-logs")),
            ..Default::default()
        };
        assert_eq!(logging.log_dir(), PathBuf::from("/tmp/bookstore-logs"));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("bookstore-dashboard-no-such-config.toml");
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("bookstore-dashboard-{}.toml", std::process::id()));
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::try_load(&path);
        std::fs::remove_file(&path).ok();
        match loaded {
            ConfigLoadResult::Loaded(c) => assert_eq!(c, config),
            other => panic!("unexpected load result: {other:?}"),
        }
    }
}
