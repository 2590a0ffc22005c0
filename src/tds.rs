// src/tds.rs
//! TDS tree management
//!
//! Verifies and builds the fixed directory skeleton required by the TeX
//! search path convention. The subdirectory list is versioned with the code,
//! not user-configurable: TeX file search only works against the exact
//! conventional layout.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Required subdirectories of a valid TDS tree
pub const REQUIRED_DIRS: &[&str] = &[
    "bibtex/bib",
    "bibtex/bst",
    "doc",
    "fonts",
    "generic",
    "scripts",
    "source",
    "tex/context",
    "tex/generic",
    "tex/latex",
    "tex/lualatex",
    "tex/plain",
    "tex/xelatex",
];

/// Outcome of creating one required subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Created(String),
    AlreadyExists(String),
}

/// Check whether every required subdirectory is present under `root`
pub fn exists(root: &Path) -> bool {
    missing(root).is_empty()
}

/// List the required subdirectories absent under `root`
pub fn missing(root: &Path) -> Vec<&'static str> {
    REQUIRED_DIRS
        .iter()
        .filter(|dir| !root.join(dir).is_dir())
        .copied()
        .collect()
}

/// Create every missing required subdirectory under `root`
///
/// Existing directories are never purged; with `overwrite` unset they are
/// reported as already present. Idempotent: a second call with the same
/// arguments yields the same final tree and no errors.
pub fn build(root: &Path, overwrite: bool) -> Result<Vec<BuildOutcome>> {
    let mut outcomes = Vec::with_capacity(REQUIRED_DIRS.len());

    for dir in REQUIRED_DIRS {
        let path = root.join(dir);
        if path.is_dir() {
            if !overwrite {
                debug!("Directory already exists: {}", path.display());
            }
            outcomes.push(BuildOutcome::AlreadyExists(dir.to_string()));
        } else {
            fs::create_dir_all(&path)?;
            debug!("Created directory: {}", path.display());
            outcomes.push(BuildOutcome::Created(dir.to_string()));
        }
    }

    info!("TDS tree ready at {}", root.display());
    Ok(outcomes)
}

/// Delete the entire tree at `root` and rebuild an empty skeleton
///
/// A missing root is logged as a warning; the rebuild still proceeds so the
/// caller always ends up with a valid empty tree.
pub fn wipe(root: &Path) -> Result<()> {
    if root.is_dir() {
        fs::remove_dir_all(root)?;
        info!("Removed TDS tree at {}", root.display());
    } else {
        warn!("{}", Error::TreeMissing(root.to_path_buf()));
    }

    build(root, true)?;
    Ok(())
}
