// src/lib.rs

//! TeXPKG Package Manager
//!
//! Local package manager for TeX styles and classes. Installs packages into
//! a private TeX Directory Structure (TDS) tree without touching the
//! system-wide TeX installation, and tracks them in a SQLite registry.
//!
//! # Architecture
//!
//! - TDS tree: fixed directory skeleton, a precondition for every install
//! - Registry: one SQLite table mapping package name to recorded metadata
//! - Orchestrator: install/update/remove as a state transition over
//!   registry + filesystem that stays consistent on partial failure

pub mod config;
pub mod db;
mod error;
pub mod install;
pub mod metadata;
pub mod tds;

pub use config::Config;
pub use db::models::{Package, PackageType};
pub use error::{Error, Result};
pub use install::{install, list, remove, update};
pub use metadata::{extract_declaration, split_version_description, Declaration};
