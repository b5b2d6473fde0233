use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::is_reserved;
use crate::config::types::Config;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "sassbatch.toml";

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
    /// Loads and validates configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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

    /// Like [`Config::load_from`], but a missing file yields `Config::default()`.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every mapping has a non-empty source and destination
    /// - No passthrough option shadows a task option (e.g. `bundle-exec`)
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, mapping) in self.files.iter().enumerate() {
            if mapping.source.as_os_str().is_empty() || mapping.destination.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("files[{}]: both 'src' and 'dest' must be set", index),
                });
            }
        }

        if let Some(key) = self.options.passthrough.keys().find(|k| is_reserved(k)) {
            return Err(ConfigError::ValidationError {
                message: format!("option '{}' is reserved and cannot be passed to sass", key),
            });
        }

        Ok(())
    }
}
