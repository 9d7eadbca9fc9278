//! Configuration management module.
//!
//! The config file is optional. Defaults reproduce the stock application.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing.
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
    pub header: HeaderConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Header image settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Image path, relative to the working directory unless absolute.
    pub image_path: PathBuf,
    /// Share of the window height taken by the header.
    pub height_fraction: f32,
}

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub maximized: bool,
    pub min_width: f32,
    pub min_height: f32,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Directory for daily rolling log files. Console only when unset.
    pub file_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Get config file path in the platform config directory.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "LogiSphere", "logisphere")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => ConfigLoadResult::Loaded(config),
                Err(e) => ConfigLoadResult::Invalid(e),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<AppConfig>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header.image_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("Header image path cannot be empty".to_string()));
        }
        let fraction = self.header.height_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ConfigError::Validation(
                "Header height fraction must be in (0, 1]".to_string(),
            ));
        }
        if self.window.min_width <= 0.0 || self.window.min_height <= 0.0 {
            return Err(ConfigError::Validation(
                "Window minimum size must be greater than 0".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation("Log level cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write the default config if no file exists at `path`.
    ///
    /// Returns `true` when a file was written.
    pub fn write_default_if_missing(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }
}

impl HeaderConfig {
    /// File name shown in the fallback text.
    pub fn image_name(&self) -> String {
        self.image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.image_path.display().to_string())
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("LogiSphere.png"),
            height_fraction: 1.0 / 3.0,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            maximized: true,
            min_width: 900.0,
            min_height: 600.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_dir: None,
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
        assert_eq!(config.header.image_path, PathBuf::from("LogiSphere.png"));
        assert!(config.window.maximized);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::parse("[header]\nimage_path = \"assets/banner.jpg\"\n").unwrap();
        assert_eq!(config.header.image_path, PathBuf::from("assets/banner.jpg"));
        assert_eq!(config.header.height_fraction, 1.0 / 3.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validation_height_fraction_bounds() {
        let mut config = AppConfig::default();

        config.header.height_fraction = 0.0;
        assert!(config.validate().is_err());

        config.header.height_fraction = 1.5;
        assert!(config.validate().is_err());

        config.header.height_fraction = f32::NAN;
        assert!(config.validate().is_err());

        config.header.height_fraction = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_image_path() {
        let mut config = AppConfig::default();
        config.header.image_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(AppConfig::parse("header = 3"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_image_name() {
        let header = HeaderConfig {
            image_path: PathBuf::from("assets/LogiSphere.png"),
            ..Default::default()
        };
        assert_eq!(header.image_name(), "LogiSphere.png");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.window.maximized = false;
        config.logging.file_dir = Some(PathBuf::from("logs"));
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, config),
            other => panic!("unexpected load result: {:?}", other),
        }
    }

    #[test]
    fn test_write_default_if_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(AppConfig::write_default_if_missing(&path).unwrap());
        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, AppConfig::default()),
            other => panic!("unexpected load result: {:?}", other),
        }

        std::fs::write(&path, "[window]\nmaximized = false\n").unwrap();
        assert!(!AppConfig::write_default_if_missing(&path).unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[window]\nmaximized = false\n"
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppConfig::try_load(&dir.path().join("config.toml")),
            ConfigLoadResult::Missing
        ));
    }
}
