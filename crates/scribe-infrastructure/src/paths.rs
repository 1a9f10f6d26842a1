//! Path management for scribe configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/scribe/            # Config directory (platform default)
//! └── config.toml              # Client configuration
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

const APP_DIR: &str = "scribe";
const CONFIG_FILE: &str = "config.toml";

/// Resolves where scribe keeps its files.
///
/// `base` overrides the platform config directory, which keeps tests away
/// from the real home directory.
#[derive(Debug, Clone, Default)]
pub struct ScribePaths {
    base: Option<PathBuf>,
}

impl ScribePaths {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// Returns the scribe configuration directory (e.g. `~/.config/scribe/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path of `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }
}
