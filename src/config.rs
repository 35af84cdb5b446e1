use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::summarize::DEFAULT_ENDPOINT;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub default_format: Option<String>,
}

impl Config {
    /// Load config from ~/.config/narrify/config.toml if it exists
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Endpoint to use; a CLI override wins over the file
    pub fn resolve_endpoint(&self, cli: Option<&str>) -> String {
        cli.or(self.endpoint.as_deref()).unwrap_or(DEFAULT_ENDPOINT).to_string()
    }

    pub fn resolve_timeout(&self, cli: Option<u64>) -> Option<Duration> {
        cli.or(self.timeout_secs).filter(|s| *s > 0).map(Duration::from_secs)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("narrify")
        .join("config.toml")
}
