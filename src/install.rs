// src/install.rs
//! Installation orchestrator
//!
//! Composes the TDS tree, metadata extractor, and registry into the
//! install/update/remove/list operations. Ordering is the contract here:
//! filesystem work happens before the registry commit, so a failed copy
//! never leaves a registry entry, and a failed registry write rolls the
//! copy back.

use crate::config::Config;
use crate::db;
use crate::db::models::{Package, PackageType};
use crate::error::{Error, Result};
use crate::metadata;
use crate::tds;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extensions mapped to PackageType::Other, checked after sty/cls/bib
const OTHER_EXTENSIONS: &[&str] = &["tex", "dtx", "ins", "def", "fd", "cfg"];

/// Derive the candidate package name from the source basename
///
/// Directory name, or filename without extension for a single file.
/// Embedded whitespace is stripped with a warning.
pub fn derive_name(source: &Path) -> Result<String> {
    let base = if source.is_file() {
        source.file_stem()
    } else {
        source.file_name()
    };

    let raw = base
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if name.is_empty() {
        return Err(Error::InvalidPackageName(raw));
    }
    if name != raw {
        warn!("Package name '{}' normalized to '{}'", raw, name);
    }

    Ok(name)
}

/// Infer the package type from the extensions present in the source
///
/// Priority: sty before cls before bib before other recognized TeX
/// extensions; first match wins.
pub fn detect_type(source: &Path) -> Result<PackageType> {
    let has_ext = |wanted: &str| -> bool {
        WalkDir::new(source)
            .into_iter()
            .filter_map(|e| e.ok())
            .any(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
            })
    };

    if has_ext("sty") {
        Ok(PackageType::Sty)
    } else if has_ext("cls") {
        Ok(PackageType::Cls)
    } else if has_ext("bib") {
        Ok(PackageType::Bib)
    } else if OTHER_EXTENSIONS.iter().any(|ext| has_ext(ext)) {
        Ok(PackageType::Other)
    } else {
        Err(Error::UnknownPackageType(
            source.to_string_lossy().into_owned(),
        ))
    }
}

/// True when the source path is a file or a non-empty directory
fn source_is_usable(source: &Path) -> bool {
    if source.is_file() {
        return true;
    }
    match fs::read_dir(source) {
        Ok(mut entries) => entries.next().is_some(),
        Err(_) => false,
    }
}

/// Copy the full source tree into `dest`
///
/// A single-file source lands as `dest/<filename>`; a directory source is
/// copied recursively. `dest` must not exist beforehand.
fn copy_source(source: &Path, dest: &Path) -> Result<()> {
    if source.is_file() {
        fs::create_dir_all(dest)?;
        let file_name = source.file_name().unwrap_or_default();
        fs::copy(source, dest.join(file_name))?;
        return Ok(());
    }

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| {
            Error::Io(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "walkdir loop")
            }))
        })?;
        let rel = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root");
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Verify the TDS tree under the configured root is complete
fn check_tree(config: &Config) -> Result<()> {
    if !config.tree_path.is_dir() {
        return Err(Error::TreeMissing(config.tree_path.clone()));
    }
    let missing = tds::missing(&config.tree_path);
    if !missing.is_empty() {
        return Err(Error::TreeIncomplete {
            root: config.tree_path.clone(),
            missing: missing.into_iter().map(String::from).collect(),
        });
    }
    Ok(())
}

/// Install a package from a local source path
///
/// Copies the source into the TDS tree, then records it in the registry.
/// If the registry write fails the copied destination is removed before the
/// error returns; no dangling untracked files.
pub fn install(conn: &mut Connection, source: &Path, config: &Config) -> Result<Package> {
    if !source_is_usable(source) {
        return Err(Error::SourceNotFound(source.to_path_buf()));
    }
    check_tree(config)?;

    let name = derive_name(source)?;

    // No partial action on a duplicate: checked before any mutation
    if Package::exists(conn, &name)? {
        return Err(Error::DuplicatePackage(name));
    }

    let package_type = detect_type(source)?;
    let install_path = config
        .tree_path
        .join(package_type.destination())
        .join(&name);

    if install_path.exists() {
        // Files on disk without a registry record: do not overwrite silently
        return Err(Error::CopyConflict(install_path));
    }

    debug!(
        "Installing '{}' ({}) to {}",
        name,
        package_type.as_str(),
        install_path.display()
    );
    // A partial copy must not survive: retries would hit CopyConflict on
    // files no record tracks
    if let Err(e) = copy_source(source, &install_path) {
        warn!(
            "Copy to {} failed, removing partial destination",
            install_path.display()
        );
        if install_path.exists() {
            if let Err(cleanup) = fs::remove_dir_all(&install_path) {
                warn!(
                    "Cleanup of {} failed: {}",
                    install_path.display(),
                    cleanup
                );
            }
        }
        return Err(e);
    }

    // Version comes from the Provides declaration; empty when undeclared
    let version = metadata::scan_source(source, package_type == PackageType::Cls)
        .map(|decl| metadata::split_version_description(&decl.options).0)
        .unwrap_or_default();

    let package = Package::new(name.clone(), version, package_type, install_path.clone());
    if let Err(e) = db::transaction(conn, |tx| package.insert(tx)) {
        warn!("Registry write failed for '{}', removing copied files", name);
        if let Err(cleanup) = fs::remove_dir_all(&install_path) {
            warn!(
                "Rollback of {} failed: {}",
                install_path.display(),
                cleanup
            );
        }
        return Err(e);
    }

    info!("Installed '{}' at {}", name, install_path.display());
    Ok(package)
}

/// Remove an installed package
///
/// Deletes the installed directory (an already-missing directory is a
/// warning, not a failure), then the registry record.
pub fn remove(conn: &mut Connection, name: &str, _config: &Config) -> Result<()> {
    let package = Package::find_by_name(conn, name)?
        .ok_or_else(|| Error::PackageNotFound(name.to_string()))?;

    if package.install_path.exists() {
        fs::remove_dir_all(&package.install_path)?;
        debug!("Removed {}", package.install_path.display());
    } else {
        warn!(
            "Installed files for '{}' already missing at {}",
            name,
            package.install_path.display()
        );
    }

    Package::delete(conn, name)?;
    info!("Removed '{}'", name);
    Ok(())
}

/// Replace an installed package with a new source
///
/// Equivalent to remove-then-install, but atomic as a unit: the prior
/// install directory is parked and the prior record captured before
/// deletion, and both are restored if the replacement install fails.
/// Metadata is re-extracted from the new source.
pub fn update(conn: &mut Connection, name: &str, source: &Path, config: &Config) -> Result<Package> {
    let old = Package::find_by_name(conn, name)?
        .ok_or_else(|| Error::PackageNotFound(name.to_string()))?;

    // Park the old files next to their install location
    let backup = backup_path(&old.install_path);
    let parked = old.install_path.exists();
    if parked {
        fs::rename(&old.install_path, &backup)?;
    }
    Package::delete(conn, name)?;

    match install(conn, source, config) {
        Ok(package) => {
            if parked {
                if let Err(e) = fs::remove_dir_all(&backup) {
                    warn!("Could not discard backup {}: {}", backup.display(), e);
                }
            }
            info!("Updated '{}' -> '{}'", name, package.name);
            Ok(package)
        }
        Err(e) => {
            warn!("Update of '{}' failed, restoring previous install", name);
            if parked {
                if let Err(restore) = fs::rename(&backup, &old.install_path) {
                    warn!(
                        "Could not restore {}: {}",
                        old.install_path.display(),
                        restore
                    );
                }
            }
            if let Err(restore) = old.insert(conn) {
                warn!("Could not restore registry record for '{}': {}", name, restore);
            }
            Err(e)
        }
    }
}

/// List all installed packages
///
/// Pure registry read; installed paths are deliberately not revalidated.
pub fn list(conn: &Connection) -> Result<Vec<Package>> {
    Package::list_all(conn)
}

fn backup_path(install_path: &Path) -> PathBuf {
    let mut name = install_path
        .file_name()
        .unwrap_or_default()
        .to_os_string();
    name.push(".texpkg-bak");
    install_path.with_file_name(name)
}
