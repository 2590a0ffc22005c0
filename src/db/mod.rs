// src/db/mod.rs
//! Registry database access
//!
//! A connection is opened at the start of one command and dropped on every
//! exit path when it goes out of scope; nothing here holds a process-wide
//! handle.

pub mod models;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Open a connection to the registry database
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    debug!("Opened registry at {}", path.display());
    Ok(conn)
}

/// Open the registry and verify its schema has been created
///
/// Package operations go through this so a never-initialized registry
/// surfaces as a typed error instead of a raw "no such table" failure.
pub fn open_existing(path: &Path) -> Result<Connection> {
    let conn = open(path)?;
    if schema::get_schema_version(&conn)? == 0 {
        return Err(Error::RegistrySchema(format!(
            "registry at {} is not initialized (run 'texpkg init')",
            path.display()
        )));
    }
    Ok(conn)
}

/// Create the registry database and bring its schema up to date
///
/// Safe to call on an existing registry; migration is idempotent.
pub fn init(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let conn = open(path)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Run `f` inside a database transaction
///
/// Commits when `f` returns Ok, rolls back when it returns Err.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&rusqlite::Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
