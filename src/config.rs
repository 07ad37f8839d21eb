//! Configuration management for MovieTUI
//!
//! Handles config file loading/saving, API key resolution, and the
//! persisted theme preference. Config is stored at
//! ~/.config/movietui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::ThemePreference;

/// Bundled OMDb API key used when none is configured
const DEFAULT_OMDB_KEY: &str = "d89ea5c4";

/// Titles fetched for the trending panel when the config has no override
const DEFAULT_TRENDING: &[&str] = &[
    "Pushpa 2",
    "Animal",
    "Jawan",
    "Pathaan",
    "Gadar 2",
    "OMG 2",
    "Rocky Aur Rani",
    "Bholaa",
];

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: Option<String>,
    /// Active theme, rewritten whenever the user toggles it
    #[serde(default)]
    pub theme: ThemePreference,
    /// Override for the curated trending title list
    pub trending: Option<Vec<String>>,
}

impl Config {
    /// Get config file path (~/.config/movietui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("movietui").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Get the OMDb API key with fallback chain:
    /// 1. Environment variable OMDB_API_KEY
    /// 2. Key from config file
    /// 3. Bundled default key
    pub fn omdb_api_key(&self) -> String {
        if let Ok(key) = std::env::var("OMDB_API_KEY") {
            return key;
        }
        self.omdb_api_key
            .clone()
            .unwrap_or_else(|| DEFAULT_OMDB_KEY.to_string())
    }

    /// The curated trending titles, configured or bundled
    pub fn trending_titles(&self) -> Vec<String> {
        self.trending
            .clone()
            .unwrap_or_else(|| DEFAULT_TRENDING.iter().map(|t| t.to_string()).collect())
    }
}
