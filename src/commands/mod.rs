// src/commands/mod.rs
//! Command handlers for the texpkg CLI

mod config;
mod init;
mod install;
mod remove;
mod reset;
mod update;
mod view;

pub use config::cmd_config;
pub use init::cmd_init;
pub use install::cmd_install;
pub use remove::cmd_remove;
pub use reset::{cmd_reset, cmd_wipe_db, cmd_wipe_tree};
pub use update::cmd_update;
pub use view::cmd_view;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use texpkg::Config;

/// Resolve the configuration file location for this invocation
pub fn config_path(cli_override: Option<&str>) -> PathBuf {
    cli_override
        .map(PathBuf::from)
        .unwrap_or_else(texpkg::config::default_config_path)
}

/// Load the configuration, with a pointer to `texpkg config` on failure
fn load_config(path: &Path) -> Result<Config> {
    Config::load(path).with_context(|| {
        format!(
            "Failed to load configuration from {} (run 'texpkg config <texmfhome>' first)",
            path.display()
        )
    })
}
