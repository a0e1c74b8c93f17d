//! Configuration for errorfortune

use eyre::Result;
use fortunestore::{DEFAULT_MAX_FAVORITES, DEFAULT_MAX_HISTORY, StoreLimits};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::styles::DEFAULT_STYLE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the fortune store directory
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Style applied when none is given on the command line
    #[serde(default = "default_style")]
    pub default_style: String,

    /// Most recent fortunes kept in history
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Maximum number of saved favorites
    #[serde(default = "default_max_favorites")]
    pub max_favorites: usize,
}

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("errorfortune")
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_max_history() -> usize {
    DEFAULT_MAX_HISTORY
}

fn default_max_favorites() -> usize {
    DEFAULT_MAX_FAVORITES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_style: default_style(),
            max_history: default_max_history(),
            max_favorites: default_max_favorites(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("errorfortune").join("config.yml")),
            Some(PathBuf::from("errorfortune.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Store limits derived from this config
    pub fn limits(&self) -> StoreLimits {
        StoreLimits {
            max_history: self.max_history,
            max_favorites: self.max_favorites,
        }
    }
}
