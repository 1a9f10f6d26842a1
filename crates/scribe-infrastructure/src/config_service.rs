//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the client configuration
//! from the configuration file (~/.config/scribe/config.toml) and applies
//! environment overrides on top.

use crate::paths::ScribePaths;
use scribe_core::config::ClientConfig;
use scribe_core::{Result, ScribeError};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `base_url` from the file.
pub const BASE_URL_ENV: &str = "SCRIBE_BASE_URL";

/// Loads [`ClientConfig`] with file < environment precedence.
///
/// Command-line overrides are applied by the caller on the returned value.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    paths: ScribePaths,
    /// Explicit file chosen by the user. Unlike the default location, it must exist.
    explicit_path: Option<PathBuf>,
}

impl ConfigService {
    pub fn new(paths: ScribePaths) -> Self {
        Self {
            paths,
            explicit_path: None,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Path the configuration is read from.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.explicit_path {
            Some(path) => Ok(path.clone()),
            None => self
                .paths
                .config_file()
                .map_err(|e| ScribeError::config(e.to_string())),
        }
    }

    /// Loads the configuration using the process environment.
    pub fn load(&self) -> Result<ClientConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Loads the configuration, resolving overrides through `env`.
    pub fn load_with_env<F>(&self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = self.config_path()?;
        let mut config = if path.exists() {
            Self::read_file(&path)?
        } else if self.explicit_path.is_some() {
            return Err(ScribeError::config(format!(
                "Configuration file not found at: {}",
                path.display()
            )));
        } else {
            tracing::debug!(
                "[ConfigService] No config file at {}, using defaults",
                path.display()
            );
            ClientConfig::default()
        };

        if let Some(base_url) = env(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("[ConfigService] {} overrides base_url", BASE_URL_ENV);
            config.base_url = base_url;
        }

        config.normalize();
        config.validate()?;

        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ClientConfig> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        tracing::info!("[ConfigService] Loaded config from {}", path.display());
        Ok(config)
    }
}
