use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::config::types::{Config, SubmitterKind};
use crate::ui::pages::PortfolioSettings;
use crate::ui::typewriter::{RoleCycle, TypewriterTiming};

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
    /// Uses `~/.config/termfolio/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("termfolio").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The role cycle is non-empty with no blank roles
    /// - Typewriter speeds are non-zero and deleting is faster than typing
    /// - Reveal thresholds are in `(0, 1]`
    /// - A webhook URL is set when the webhook submitter is selected
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings().map(|_| ())
    }

    /// Builds the settings pages mount with, validating along the way.
    pub fn settings(&self) -> Result<PortfolioSettings, ConfigError> {
        let roles = RoleCycle::new(self.hero.roles.iter().cloned()).map_err(invalid)?;
        let timing = TypewriterTiming::new(
            Duration::from_millis(self.hero.type_speed_ms),
            Duration::from_millis(self.hero.delete_speed_ms),
            Duration::from_millis(self.hero.dwell_ms),
        )
        .map_err(invalid)?;

        let about_threshold = threshold("reveal.about_threshold", self.reveal.about_threshold)?;
        let timeline_threshold =
            threshold("reveal.timeline_threshold", self.reveal.timeline_threshold)?;

        if self.hero.name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "hero.name must not be empty".to_string(),
            });
        }

        if self.contact.submitter == SubmitterKind::Webhook {
            let has_url = self
                .contact
                .webhook_url
                .as_deref()
                .is_some_and(|url| url.starts_with("http://") || url.starts_with("https://"));
            if !has_url {
                return Err(ConfigError::ValidationError {
                    message: "contact.webhook_url must be an http(s) URL when submitter = \"webhook\""
                        .to_string(),
                });
            }
        }

        Ok(PortfolioSettings {
            name: self.hero.name.clone(),
            roles,
            timing,
            about_threshold,
            timeline_threshold,
            start_page: self.ui.start_page,
            notice_duration: Duration::from_secs(self.ui.notice_seconds.max(1)),
        })
    }

    /// The effective configuration as TOML, for `--print-config`.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn invalid(err: impl std::fmt::Display) -> ConfigError {
    ConfigError::ValidationError {
        message: err.to_string(),
    }
}

fn threshold(name: &str, value: f64) -> Result<f32, ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(value as f32)
    } else {
        Err(ConfigError::ValidationError {
            message: format!("{name} must be in (0, 1], got {value}"),
        })
    }
}
