// src/config.rs
//! Configuration loading and storage
//!
//! One JSON object with the TDS tree root and the registry location. The
//! core operations receive this as plain data; only the `config` command
//! writes it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Registry filename used when the configuration does not name one
pub const DEFAULT_REGISTRY_FILE: &str = ".pkg.db";

/// Configuration filename under the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".texpkg.json";

/// Loaded texpkg configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of the TDS tree (resolved TEXMFHOME)
    pub tree_path: PathBuf,
    /// Location of the registry database
    #[serde(default)]
    pub registry_path: Option<PathBuf>,
}

impl Config {
    /// Create a configuration for the given tree root
    pub fn new(tree_path: PathBuf, registry_path: Option<PathBuf>) -> Self {
        Self {
            tree_path,
            registry_path,
        }
    }

    /// Effective registry path: the configured one, or the default filename
    /// under the tree root
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(|| self.tree_path.join(DEFAULT_REGISTRY_FILE))
    }

    /// Load the configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as JSON
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn store(&self, path: &Path, force: bool) -> Result<bool> {
        if path.is_file() && !force {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!("Wrote configuration to {}", path.display());
        Ok(true)
    }
}

/// Default configuration file location
///
/// `TEXPKG_CONFIG` overrides; otherwise `~/.texpkg.json`, falling back to
/// the current directory when no home directory is available.
pub fn default_config_path() -> PathBuf {
    std::env::var("TEXPKG_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_CONFIG_FILE)
        })
}
