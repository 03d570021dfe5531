use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BASE_URL;

const APP_NAME: &str = "se-mock-events";
const CONFIG_FILE: &str = "config.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// StreamElements JWT used when none is given on the command line
    #[serde(default)]
    pub jwt_token: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            jwt_token: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`
    ///
    /// A missing file yields the defaults, as does a file that fails to parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid config file {}: {}", path.display(), e);
            Self::default()
        }))
    }

    /// Loads configuration from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Returns the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_NAME))
    }

    /// Returns the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
