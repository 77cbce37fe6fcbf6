//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default portal address when neither the environment nor the config file
/// provides one
const DEFAULT_PORTAL_URL: &str = "http://127.0.0.1:3000";

/// Environment override for the portal address
const PORTAL_URL_ENV: &str = "FELLOWSHIP_PORTAL_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Portal base URL
    pub portal_url: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "fellowship", "fellowship-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Portal base URL to use: environment override first, then the config
    /// file, then the default.
    pub fn resolve_portal_url(&self) -> String {
        std::env::var(PORTAL_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.portal_url.clone())
            .unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string())
    }
}
