// src/commands/reset.rs
//! Destructive reset commands
//!
//! All three are gated on an explicit --yes flag supplied by the caller;
//! no deletion happens without it.

use super::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use texpkg::db::schema;
use texpkg::{db, tds};
use tracing::info;

fn refuse_unconfirmed(what: &str) -> Result<()> {
    println!("This deletes {}. Pass --yes to confirm.", what);
    Ok(())
}

/// Delete and rebuild the TDS tree
pub fn cmd_wipe_tree(config_path: &Path, confirmed: bool) -> Result<()> {
    if !confirmed {
        return refuse_unconfirmed("the entire TDS tree and every installed package file");
    }
    let config = load_config(config_path)?;

    info!("Wiping TDS tree at {}", config.tree_path.display());
    tds::wipe(&config.tree_path)
        .with_context(|| format!("Failed to wipe TDS tree at {}", config.tree_path.display()))?;

    println!("TDS tree wiped and rebuilt at {}", config.tree_path.display());
    Ok(())
}

/// Drop and recreate the package registry
pub fn cmd_wipe_db(config_path: &Path, confirmed: bool) -> Result<()> {
    if !confirmed {
        return refuse_unconfirmed("every package record in the registry");
    }
    let config = load_config(config_path)?;
    let registry = config.registry_path();

    info!("Resetting registry at {}", registry.display());
    let conn = db::open(&registry).context("Failed to open package registry")?;
    schema::reset(&conn)
        .with_context(|| format!("Failed to reset registry at {}", registry.display()))?;

    println!("Registry reset at {}", registry.display());
    Ok(())
}

/// Wipe the registry, then the tree
pub fn cmd_reset(config_path: &Path, confirmed: bool) -> Result<()> {
    if !confirmed {
        return refuse_unconfirmed("the registry and the entire TDS tree");
    }
    cmd_wipe_db(config_path, true)?;
    cmd_wipe_tree(config_path, true)?;
    println!("Reset complete.");
    Ok(())
}
