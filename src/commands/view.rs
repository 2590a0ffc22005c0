// src/commands/view.rs
//! Registry listing command

use super::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use texpkg::db;

/// List installed packages in install order
pub fn cmd_view(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;

    let conn = db::open_existing(&config.registry_path())
        .context("Failed to open package registry")?;
    let packages = texpkg::list(&conn).context("Failed to list packages")?;

    if packages.is_empty() {
        println!("No packages installed.");
        return Ok(());
    }

    println!("Installed packages ({}):", packages.len());
    for package in &packages {
        println!(
            "  {:<20} {:<12} {:<6} {}",
            package.name,
            if package.version.is_empty() {
                "-"
            } else {
                package.version.as_str()
            },
            package.package_type.as_str(),
            package.install_path.display()
        );
    }

    Ok(())
}
