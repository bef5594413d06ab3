use super::ExcerptConfig;
use crate::error::DecodeError;
use crate::query::QueryString;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Settings for a search-results page, persisted as serpkit.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub excerpt: ExcerptConfig,
}

impl PageConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("serpkit.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.query.param.is_empty() {
            errors.push("query.param must not be empty".to_string());
        }

        if self.excerpt.length == 0 {
            errors.push("excerpt.length must be at least 1".to_string());
        }

        if self.excerpt.highlight_open.is_empty() {
            errors.push("excerpt.highlight_open must not be empty".to_string());
        }

        if self.excerpt.highlight_close.is_empty() {
            errors.push("excerpt.highlight_close must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let errors = self.validate();
        if errors.is_empty() {
            return self.clone();
        }
        warn!(?errors, "invalid page config, substituting defaults");

        let defaults = Self::default();
        let pick = |value: &String, default: String| {
            if value.is_empty() { default } else { value.clone() }
        };
        Self {
            query: QueryConfig {
                param: pick(&self.query.param, defaults.query.param),
            },
            excerpt: ExcerptConfig {
                length: if self.excerpt.length == 0 {
                    defaults.excerpt.length
                } else {
                    self.excerpt.length
                },
                highlight_open: pick(&self.excerpt.highlight_open, defaults.excerpt.highlight_open),
                highlight_close: pick(
                    &self.excerpt.highlight_close,
                    defaults.excerpt.highlight_close,
                ),
                ..self.excerpt.clone()
            },
        }
    }

    /// Reads the configured search-terms parameter from a query string.
    pub fn search_terms(&self, query: &QueryString<'_>) -> Result<Option<String>, DecodeError> {
        query.get(&self.query.param)
    }
}

/// Which query parameter carries the search terms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_param")]
    pub param: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            param: default_param(),
        }
    }
}

fn default_param() -> String {
    "q".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
