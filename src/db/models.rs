// src/db/models.rs

//! Data models for registry entities
//!
//! Defines the Package record corresponding to the `packages` table and the
//! methods for creating, reading, updating, and deleting records. Every
//! method takes an explicit connection scoped to one command invocation.

use crate::error::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::PathBuf;
use std::str::FromStr;

/// Type of an installed package, inferred from its file extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    Sty,
    Cls,
    Bib,
    Other,
}

impl PackageType {
    pub fn as_str(&self) -> &str {
        match self {
            PackageType::Sty => "sty",
            PackageType::Cls => "cls",
            PackageType::Bib => "bib",
            PackageType::Other => "other",
        }
    }

    /// TDS subdirectory that installs of this type land in
    pub fn destination(&self) -> &str {
        match self {
            PackageType::Sty | PackageType::Cls => "tex/latex",
            PackageType::Bib => "bibtex/bib",
            PackageType::Other => "tex/generic",
        }
    }
}

impl FromStr for PackageType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sty" => Ok(PackageType::Sty),
            "cls" => Ok(PackageType::Cls),
            "bib" => Ok(PackageType::Bib),
            "other" => Ok(PackageType::Other),
            _ => Err(format!("Invalid package type: {}", s)),
        }
    }
}

/// A Package represents one installed package tracked by the registry
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    /// Version token from the Provides declaration, empty when undeclared
    pub version: String,
    pub package_type: PackageType,
    /// Absolute path of the installed copy inside the TDS tree
    pub install_path: PathBuf,
}

impl Package {
    /// Create a new Package record
    pub fn new(
        name: String,
        version: String,
        package_type: PackageType,
        install_path: PathBuf,
    ) -> Self {
        Self {
            name,
            version,
            package_type,
            install_path,
        }
    }

    /// Check whether a record exists for `name`
    pub fn exists(conn: &Connection, name: &str) -> Result<bool> {
        let found: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM packages WHERE name = ?1)",
            [name],
            |row| row.get(0),
        )?;
        Ok(found)
    }

    /// Find a record by name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT name, version, type, path FROM packages WHERE name = ?1")?;

        let package = stmt.query_row([name], Self::from_row).optional()?;

        Ok(package)
    }

    /// Insert this record
    ///
    /// Fails with DuplicatePackage if a record for this name already exists;
    /// a single INSERT, so never observable as partially applied.
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        if Self::exists(conn, &self.name)? {
            return Err(Error::DuplicatePackage(self.name.clone()));
        }

        conn.execute(
            "INSERT INTO packages (name, version, type, path) VALUES (?1, ?2, ?3, ?4)",
            params![
                &self.name,
                &self.version,
                self.package_type.as_str(),
                self.install_path.to_string_lossy(),
            ],
        )?;

        Ok(())
    }

    /// Replace the record for this name
    ///
    /// Fails with PackageNotFound if no record exists.
    pub fn update(&self, conn: &Connection) -> Result<()> {
        let changed = conn.execute(
            "UPDATE packages SET version = ?2, type = ?3, path = ?4 WHERE name = ?1",
            params![
                &self.name,
                &self.version,
                self.package_type.as_str(),
                self.install_path.to_string_lossy(),
            ],
        )?;

        if changed == 0 {
            return Err(Error::PackageNotFound(self.name.clone()));
        }

        Ok(())
    }

    /// Delete the record for `name`; a no-op when absent
    pub fn delete(conn: &Connection, name: &str) -> Result<()> {
        conn.execute("DELETE FROM packages WHERE name = ?1", [name])?;
        Ok(())
    }

    /// List all records in insertion order
    ///
    /// Re-querying yields a fresh snapshot, not a live cursor.
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT name, version, type, path FROM packages ORDER BY rowid")?;

        let packages = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(packages)
    }

    /// Convert a database row to a Package
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let type_str: String = row.get(2)?;
        let package_type = type_str.parse::<PackageType>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?;

        let path: String = row.get(3)?;

        Ok(Self {
            name: row.get(0)?,
            version: row.get(1)?,
            package_type,
            install_path: PathBuf::from(path),
        })
    }
}
