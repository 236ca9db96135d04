//! Application configuration management.
//!
//! Configuration is stored at `~/.config/registra/config.json` and covers
//! the API base address plus the last username used, so the next sign-in
//! can be pre-filled. The base address can also come from the
//! `REGISTRA_API_URL` environment variable, which wins over the default
//! but not over an explicit config value.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, Result};

/// Application name used for the config directory path
const APP_NAME: &str = "registra";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Production API base address, used when nothing else is configured.
const DEFAULT_API_URL: &str = "https://api.registrospoliciales.com";

/// Environment variable overriding the base address.
const API_URL_ENV: &str = "REGISTRA_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ApiError::Storage(format!("Failed to read config: {e}")))?;
            serde_json::from_str(&contents)
                .map_err(|e| ApiError::Storage(format!("Failed to parse config: {e}")))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::Storage(format!("Failed to create config dir: {e}")))?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ApiError::Storage(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)
            .map_err(|e| ApiError::Storage(format!("Failed to write config: {e}")))
    }

    /// Resolve the API base address: explicit config, then environment,
    /// then the built-in default.
    pub fn api_url(&self) -> String {
        if let Some(ref url) = self.api_url {
            return url.clone();
        }
        std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ApiError::Storage("Could not find config directory".to_string()))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let config = Config {
            api_url: Some("http://localhost:3000".to_string()),
            last_username: None,
        };
        assert_eq!(config.api_url(), "http://localhost:3000");
    }
}
