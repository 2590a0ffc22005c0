// src/commands/update.rs
//! Package update command

use super::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use texpkg::db;
use tracing::info;

/// Replace an installed package with a new source
pub fn cmd_update(config_path: &Path, name: &str, source: &str) -> Result<()> {
    let config = load_config(config_path)?;

    info!("Updating package '{}' from {}", name, source);
    let mut conn = db::open_existing(&config.registry_path())
        .context("Failed to open package registry")?;

    let package = texpkg::update(&mut conn, name, Path::new(source), &config)
        .with_context(|| format!("Failed to update '{}'", name))?;

    println!(
        "Updated package: {} {}",
        package.name,
        if package.version.is_empty() {
            "(unversioned)".to_string()
        } else {
            package.version.clone()
        }
    );
    println!("  Type: {}", package.package_type.as_str());
    println!("  Path: {}", package.install_path.display());

    Ok(())
}
