//! Optional TOML configuration.
//!
//! ```toml
//! limit = 10          # results in a top-K listing
//! best_match = false  # print only the single closest declaration
//! show_scores = false # append the edit distance to each result
//! ```

use crate::error::{Result, SearchError};
use crate::input::expand_tilde;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub limit: usize,
    pub best_match: bool,
    pub show_scores: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            best_match: false,
            show_scores: false,
        }
    }
}

impl Config {
    /// `<config dir>/declgrep/config.toml`, e.g. `~/.config/declgrep/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("declgrep").join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        if config.limit == 0 {
            return Err(SearchError::InvalidLimit.into());
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let path = expand_tilde(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Loads an explicitly requested file, else the default file if it
    /// exists, else built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using config at {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
