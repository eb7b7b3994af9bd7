//! Report configuration deserialization.

use crate::config::ConfigError;
use crate::elapsed::{ElapsedError, ElapsedFormat, DEFAULT_PATTERN};
use crate::stale::StaleCriteria;
use crate::templates::DEFAULT_TITLE;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Settings parsed from a report config TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportConfig {
    /// HTML document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Days after opening before an issue counts as stale.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,

    /// Days without a comment before an issue counts as stale.
    #[serde(default = "default_max_silence_days")]
    pub max_silence_days: u32,

    /// Also report issues that aren't stale.
    #[serde(default)]
    pub include_active: bool,

    /// Pattern for the issue age and last comment lines.
    #[serde(default = "default_elapsed_format")]
    pub elapsed_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            max_age_days: default_max_age_days(),
            max_silence_days: default_max_silence_days(),
            include_active: false,
            elapsed_format: default_elapsed_format(),
        }
    }
}

pub(crate) fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

pub(crate) fn default_max_age_days() -> u32 {
    30
}

pub(crate) fn default_max_silence_days() -> u32 {
    7
}

pub(crate) fn default_elapsed_format() -> String {
    DEFAULT_PATTERN.to_string()
}

impl ReportConfig {
    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading report config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Loads a config file, or returns the defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file is invalid.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "No report config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validates the config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if a value is unusable.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fail = |message: &str| ConfigError::ValidationError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if self.title.trim().is_empty() {
            return Err(fail("title cannot be empty"));
        }
        if self.max_age_days == 0 {
            return Err(fail("max-age-days must be at least 1"));
        }
        if self.max_silence_days == 0 {
            return Err(fail("max-silence-days must be at least 1"));
        }
        if let Err(e) = self.elapsed_format() {
            return Err(fail(&e.to_string()));
        }

        Ok(())
    }

    /// Parses the elapsed-time pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ElapsedError`] if the pattern has an unknown or unterminated field.
    pub fn elapsed_format(&self) -> Result<ElapsedFormat, ElapsedError> {
        ElapsedFormat::parse(&self.elapsed_format)
    }

    /// Returns the stale thresholds.
    #[must_use]
    pub fn criteria(&self) -> StaleCriteria {
        StaleCriteria::from_days(self.max_age_days, self.max_silence_days)
    }
}
