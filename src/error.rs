// src/error.rs
//! Error types for texpkg

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during package management operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file is missing
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// TDS tree root does not exist
    #[error("TDS tree not found at {0}")]
    TreeMissing(PathBuf),

    /// TDS tree exists but required subdirectories are absent
    #[error("TDS tree at {root} is incomplete (missing: {missing:?})")]
    TreeIncomplete { root: PathBuf, missing: Vec<String> },

    /// Install source path does not exist or is empty
    #[error("Package source not found: {0}")]
    SourceNotFound(PathBuf),

    /// Derived package name is empty after normalization
    #[error("Cannot derive a package name from '{0}'")]
    InvalidPackageName(String),

    /// No recognized TeX file extensions in the source
    #[error("Unknown package type for '{0}': no .sty, .cls, .bib or other TeX files found")]
    UnknownPackageType(String),

    /// A package with this name is already registered
    #[error("Package '{0}' is already installed")]
    DuplicatePackage(String),

    /// No registered package with this name
    #[error("Package '{0}' is not installed")]
    PackageNotFound(String),

    /// Destination already exists on disk without a registry record
    #[error("Destination '{0}' already exists; registry and tree are out of sync")]
    CopyConflict(PathBuf),

    /// Registry schema is missing or at an unsupported version
    #[error("Registry schema error: {0}")]
    RegistrySchema(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for texpkg operations
pub type Result<T> = std::result::Result<T, Error>;
