// src/commands/config.rs
//! Configuration command

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use texpkg::{tds, Config};
use tracing::info;

/// Write the configuration file, optionally building the tree skeleton
pub fn cmd_config(
    config_path: &Path,
    texmfhome: &str,
    pkg_db: Option<String>,
    mktree: bool,
    force: bool,
) -> Result<()> {
    let config = Config::new(PathBuf::from(texmfhome), pkg_db.map(PathBuf::from));

    let written = config
        .store(config_path, force)
        .with_context(|| format!("Failed to write settings to {}", config_path.display()))?;

    if written {
        info!("Configuration written to {}", config_path.display());
        println!("Configuration written to {}", config_path.display());
    } else {
        println!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    if mktree {
        tds::build(&config.tree_path, false)
            .with_context(|| format!("Failed to build TDS tree at {}", config.tree_path.display()))?;
        println!("TDS tree built at {}", config.tree_path.display());
    }

    Ok(())
}
