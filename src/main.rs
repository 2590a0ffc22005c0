// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config_path = commands::config_path(cli.config.as_deref());

    match cli.command {
        Some(Commands::Config {
            texmfhome,
            pkg_db,
            mktree,
            force,
        }) => commands::cmd_config(&config_path, &texmfhome, pkg_db, mktree, force),
        Some(Commands::Init { force }) => commands::cmd_init(&config_path, force),
        Some(Commands::Install { path, verbose }) => {
            commands::cmd_install(&config_path, &path, verbose)
        }
        Some(Commands::Update { name, path }) => commands::cmd_update(&config_path, &name, &path),
        Some(Commands::Remove { name }) => commands::cmd_remove(&config_path, &name),
        Some(Commands::View) => commands::cmd_view(&config_path),
        Some(Commands::WipeTree { yes }) => commands::cmd_wipe_tree(&config_path, yes),
        Some(Commands::WipeDb { yes }) => commands::cmd_wipe_db(&config_path, yes),
        Some(Commands::Reset { yes }) => commands::cmd_reset(&config_path, yes),
        None => {
            println!("TeXPKG v{}", env!("CARGO_PKG_VERSION"));
            println!("Deploy and maintain your TeX packages.");
            println!("Run 'texpkg --help' for usage information.");
            Ok(())
        }
    }
}
