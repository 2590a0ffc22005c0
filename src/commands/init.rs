// src/commands/init.rs
//! Initialization command

use super::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use texpkg::tds::{self, BuildOutcome};
use texpkg::{db, Config};
use tracing::info;

/// Build the TDS tree if absent or incomplete, and create the registry
pub fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    let config: Config = load_config(config_path)?;

    info!("Initializing TDS tree at {}", config.tree_path.display());
    let outcomes = tds::build(&config.tree_path, force)
        .with_context(|| format!("Failed to build TDS tree at {}", config.tree_path.display()))?;

    let created = outcomes
        .iter()
        .filter(|o| matches!(o, BuildOutcome::Created(_)))
        .count();
    if created > 0 {
        println!(
            "TDS tree ready at {} ({} directories created)",
            config.tree_path.display(),
            created
        );
    } else {
        println!("TDS tree already complete at {}", config.tree_path.display());
    }
    if !force {
        for outcome in &outcomes {
            if let BuildOutcome::AlreadyExists(dir) = outcome {
                println!("  already exists: {}", dir);
            }
        }
    }

    let registry = config.registry_path();
    db::init(&registry)
        .with_context(|| format!("Failed to initialize registry at {}", registry.display()))?;
    println!("Registry ready at {}", registry.display());

    Ok(())
}
