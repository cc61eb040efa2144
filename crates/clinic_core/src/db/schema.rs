//! Table definitions and idempotent schema setup.
//!
//! # Responsibility
//! - Own the DDL for `patients` and `doctors`.
//! - Create missing tables without touching existing ones.
//!
//! # Invariants
//! - Every statement uses `CREATE TABLE IF NOT EXISTS`; running setup twice is a no-op.
//! - Identifiers are assigned by SQLite (`AUTOINCREMENT`) and never reused.

use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy)]
struct TableDef {
    name: &'static str,
    sql: &'static str,
}

const TABLES: &[TableDef] = &[
    TableDef {
        name: "patients",
        sql: "CREATE TABLE IF NOT EXISTS patients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) <= 100),
            age INTEGER NOT NULL,
            gender TEXT CHECK (length(gender) <= 10),
            phone TEXT CHECK (length(phone) <= 20)
        );",
    },
    TableDef {
        name: "doctors",
        sql: "CREATE TABLE IF NOT EXISTS doctors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) <= 100),
            specialty TEXT CHECK (length(specialty) <= 100),
            phone TEXT CHECK (length(phone) <= 20)
        );",
    },
];

/// DDL failure for one table.
#[derive(Debug)]
pub struct SchemaError {
    pub table: &'static str,
    pub source: rusqlite::Error,
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to ensure table `{}`: {}", self.table, self.source)
    }
}

impl Error for SchemaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Returns the names of all tables managed by [`ensure_schema`].
pub fn managed_tables() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|table| table.name)
}

/// Creates `patients` and `doctors` when absent.
///
/// Stops at the first rejected statement; tables created before the failure
/// are left in place.
pub fn ensure_schema(conn: &Connection) -> Result<(), SchemaError> {
    for table in TABLES {
        if let Err(err) = conn.execute_batch(table.sql) {
            error!(
                "event=schema_ensure module=db status=error table={} error={}",
                table.name, err
            );
            return Err(SchemaError {
                table: table.name,
                source: err,
            });
        }
    }

    info!(
        "event=schema_ensure module=db status=ok tables={}",
        TABLES.len()
    );
    Ok(())
}
