use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/ventured/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ventured").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - An existing file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Rejects settings that would stall or never finish an animation and
    /// empty navigation targets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: &str| -> Result<(), ConfigError> {
            Err(ConfigError::ValidationError {
                message: message.to_string(),
            })
        };

        if self.page.fps == 0 {
            return invalid("page.fps must be greater than zero");
        }

        let animation = &self.animation;
        if animation.reveal_interval_ms == 0 {
            return invalid("animation.reveal_interval_ms must be greater than zero");
        }
        if animation.marquee_speed == 0 {
            return invalid("animation.marquee_speed must be greater than zero");
        }
        if animation.rain_tick_ms == 0 {
            return invalid("animation.rain_tick_ms must be greater than zero");
        }
        if animation.rain_column_width == 0 {
            return invalid("animation.rain_column_width must be greater than zero");
        }
        let probability = animation.rain_reset_probability;
        if !(probability > 0.0 && probability <= 1.0) {
            return invalid("animation.rain_reset_probability must be in (0, 1]");
        }

        let links = &self.links;
        if links.apply_url.trim().is_empty() {
            return invalid("links.apply_url must not be empty");
        }
        if links.contact_email.trim().is_empty() {
            return invalid("links.contact_email must not be empty");
        }
        if links.partnership.to.trim().is_empty() {
            return invalid("links.partnership.to must not be empty");
        }

        Ok(())
    }

    /// Serialize the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
