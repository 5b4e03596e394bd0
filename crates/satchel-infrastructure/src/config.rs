//! Deployment configuration file storage.
//!
//! Loads config.toml from the satchel config directory and parses it into
//! the [`DeploymentConfig`] domain model.

use std::fs;
use std::path::{Path, PathBuf};

use satchel_core::config::DeploymentConfig;

use crate::paths::SatchelPaths;

/// Errors that can occur during config storage operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file not found.
    NotFound(PathBuf),
    /// File I/O error.
    IoError(std::io::Error),
    /// TOML parsing error.
    ParseError(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(path) => {
                write!(f, "Configuration file not found at: {}", path.display())
            }
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            ConfigError::ConfigDirNotFound => {
                write!(f, "Could not determine config directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::ParseError(e)
    }
}

/// Storage for the deployment configuration file (config.toml).
///
/// Responsibilities:
/// - Load config.toml from the satchel config directory
/// - Parse TOML into the DeploymentConfig domain model
/// - Provide error handling for missing or invalid files
///
/// Does NOT:
/// - Write or modify config files (read-only)
/// - Validate the deployment values against the server
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a new ConfigStorage with the default path.
    ///
    /// # Returns
    ///
    /// - `Ok(ConfigStorage)`: successfully determined config path
    /// - `Err(ConfigError::ConfigDirNotFound)`: could not find config dir
    pub fn new() -> Result<Self, ConfigError> {
        let path = SatchelPaths::config_file().map_err(|_| ConfigError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a new ConfigStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the deployment configuration from the TOML file.
    ///
    /// # Returns
    ///
    /// - `Ok(DeploymentConfig)`: successfully loaded and parsed
    /// - `Err(ConfigError::NotFound)`: file doesn't exist
    /// - `Err(ConfigError::IoError)`: failed to read file
    /// - `Err(ConfigError::ParseError)`: invalid TOML
    pub fn load(&self) -> Result<DeploymentConfig, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Returns the path to the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
