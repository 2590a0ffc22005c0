// src/cli.rs
//! CLI definitions for texpkg
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "texpkg")]
#[command(author = "TeXPKG Project")]
#[command(version)]
#[command(about = "Deploy and maintain your TeX packages", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file
    Config {
        /// Root of the TDS tree (resolved TEXMFHOME)
        texmfhome: String,

        /// Registry database location (default: .pkg.db under the tree)
        pkg_db: Option<String>,

        /// Also build the TDS tree skeleton
        #[arg(long)]
        mktree: bool,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Build the TDS tree and registry if absent or incomplete
    Init {
        /// Report existing directories instead of skipping them silently
        #[arg(short, long)]
        force: bool,
    },

    /// Install a package from a local file or directory
    Install {
        /// Path to the package source
        path: String,

        /// Print every file copied
        #[arg(short, long)]
        verbose: bool,
    },

    /// Replace an installed package with a new source
    Update {
        /// Name of the installed package
        name: String,

        /// Path to the replacement source
        path: String,
    },

    /// Remove an installed package
    Remove {
        /// Name of the installed package
        name: String,
    },

    /// List installed packages
    View,

    /// Delete and rebuild the TDS tree
    WipeTree {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Drop and recreate the package registry
    WipeDb {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Wipe the registry, then the tree
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
