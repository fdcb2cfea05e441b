use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pubdate_parse::Normalizer;
use serde::{Deserialize, Serialize};

use crate::error::PubdateError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub rename: RenameConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Dropped from titles on top of the built-in banned tokens.
    #[serde(default)]
    pub extra_banned: Vec<String>,
    /// Replace an existing file when the target name is taken.
    #[serde(default)]
    pub overwrite: bool,
}

impl AppConfig {
    /// Load config: the user file if it exists, otherwise built-in defaults.
    pub fn load() -> Result<Self, PubdateError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Self::defaults()
        }
    }

    /// Load config from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, PubdateError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PubdateError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| PubdateError::Config(format!("{}: {e}", path.display())))
    }

    fn defaults() -> Result<Self, PubdateError> {
        toml::from_str(DEFAULT_CONFIG).map_err(|e| PubdateError::Config(e.to_string()))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "pubdate")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Normalizer carrying the configured banned tokens.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::with_banned(&self.rename.extra_banned)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
