// src/commands/remove.rs
//! Package removal command

use super::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use texpkg::db;
use tracing::info;

/// Remove an installed package
pub fn cmd_remove(config_path: &Path, name: &str) -> Result<()> {
    let config = load_config(config_path)?;

    info!("Removing package '{}'", name);
    let mut conn = db::open_existing(&config.registry_path())
        .context("Failed to open package registry")?;

    texpkg::remove(&mut conn, name, &config)
        .with_context(|| format!("Failed to remove '{}'", name))?;

    println!("Removed package: {}", name);
    Ok(())
}
