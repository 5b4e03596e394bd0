//! Unified path management for satchel configuration and secure storage.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => {
                write!(f, "Cannot determine the user configuration directory")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for satchel.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/satchel/           # Config directory
/// ├── config.toml              # Deployment configuration ([api], [device])
/// └── secure/                  # Secure key-value entries, one file per key
/// ```
pub struct SatchelPaths;

impl SatchelPaths {
    /// Returns the satchel configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/satchel/`
    /// - `Err(PathError::ConfigDirNotFound)`: could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("satchel"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the deployment configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory backing the secure key-value store.
    ///
    /// # Security Note
    ///
    /// Entries under this directory are created with owner-only
    /// permissions; see [`crate::storage::SecureFileStore`].
    pub fn secure_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_share_the_config_dir() {
        // dirs::config_dir is present on all tier-1 platforms.
        let dir = SatchelPaths::config_dir().unwrap();
        assert!(SatchelPaths::config_file().unwrap().starts_with(&dir));
        assert!(SatchelPaths::secure_dir().unwrap().starts_with(&dir));
    }
}
