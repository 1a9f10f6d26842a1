//! Client configuration.
//!
//! Loaded from `~/.config/scribe/config.toml` by the infrastructure layer.
//! Every field has a default so an absent or partial file is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, ScribeError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// How the login form is encoded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginEncoding {
    /// JSON body `{"email", "password"}`.
    #[default]
    Json,
    /// OAuth2 password form: `username=<email>&password=<password>`.
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the blog API, without a trailing slash.
    pub base_url: String,
    pub login_encoding: LoginEncoding,
    /// Per-request timeout. Requests wait indefinitely when unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_encoding: LoginEncoding::default(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Replaces the base URL, dropping any trailing slashes.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalize();
        self
    }

    pub fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = trimmed.to_string();
    }

    /// Rejects settings no request could be built from.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ScribeError::config("base_url must not be empty"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
