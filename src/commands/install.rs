// src/commands/install.rs
//! Package installation command

use super::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use texpkg::db;
use tracing::info;
use walkdir::WalkDir;

/// Install a package from a local file or directory
pub fn cmd_install(config_path: &Path, source: &str, verbose: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let source = Path::new(source);

    info!("Installing package from {}", source.display());
    let mut conn = db::open_existing(&config.registry_path())
        .context("Failed to open package registry")?;

    let package = texpkg::install(&mut conn, source, &config)
        .with_context(|| format!("Failed to install '{}'", source.display()))?;

    println!(
        "Installed package: {} {}",
        package.name,
        if package.version.is_empty() {
            "(unversioned)".to_string()
        } else {
            package.version.clone()
        }
    );
    println!("  Type: {}", package.package_type.as_str());
    println!("  Path: {}", package.install_path.display());

    if verbose {
        for entry in WalkDir::new(&package.install_path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            println!("  copied: {}", entry.path().display());
        }
    }

    Ok(())
}
