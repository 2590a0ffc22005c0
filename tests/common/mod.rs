// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use texpkg::{db, tds, Config};

/// Create a fully initialized workspace: TDS tree, registry, configuration.
///
/// Returns (TempDir, Config) - keep the TempDir alive to prevent cleanup.
pub fn setup_workspace() -> (TempDir, Config) {
    let temp_dir = tempfile::tempdir().unwrap();
    let tree_path = temp_dir.path().join("texmf");

    tds::build(&tree_path, false).unwrap();

    let config = Config::new(tree_path, None);
    db::init(&config.registry_path()).unwrap();

    (temp_dir, config)
}

/// Create a package source directory containing one declared .sty file.
///
/// The directory is created under `base` with the given (possibly
/// whitespace-containing) name.
pub fn make_sty_source(base: &Path, dir_name: &str, pkg_name: &str, options: &str) -> PathBuf {
    let source = base.join(dir_name);
    fs::create_dir_all(&source).unwrap();
    fs::write(
        source.join(format!("{}.sty", pkg_name)),
        format!("\\ProvidesPackage{{{}}}[{}]\n", pkg_name, options),
    )
    .unwrap();
    source
}

/// Create a package source directory containing only a .bib file.
pub fn make_bib_source(base: &Path, name: &str) -> PathBuf {
    let source = base.join(name);
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join(format!("{}.bib", name)), "@misc{key,}\n").unwrap();
    source
}
