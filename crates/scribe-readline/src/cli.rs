use std::path::PathBuf;

use clap::Parser;
use scribe_core::Result;
use scribe_core::config::ClientConfig;
use scribe_infrastructure::{ConfigService, ScribePaths};

/// Terminal client for a blog platform.
#[derive(Parser, Debug)]
#[command(name = "scribe", version, about)]
pub struct Cli {
    /// Base URL of the blog API (overrides config file and SCRIBE_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file to use instead of ~/.config/scribe/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Resolves the client configuration: flag > environment > file > defaults.
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        self.resolve_config_with_env(|key| std::env::var(key).ok())
    }

    pub fn resolve_config_with_env<F>(&self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut service = ConfigService::new(ScribePaths::default());
        if let Some(path) = &self.config {
            service = service.with_config_path(path);
        }

        let config = match &self.base_url {
            Some(url) => service.load_with_env(env)?.with_base_url(url.as_str()),
            None => service.load_with_env(env)?,
        };
        config.validate()?;
        Ok(config)
    }
}
