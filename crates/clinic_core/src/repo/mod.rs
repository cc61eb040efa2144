//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts (`insert`, `list_all`).
//! - Isolate SQLite query details from service/front-end orchestration.
//!
//! # Invariants
//! - Every write binds its values positionally; SQL is never built from user text.
//! - Listings are ordered by `id ASC` and fully materialized before return.
//! - Read paths run every stored row through `model::validate`; a row that would
//!   not pass as fresh input is reported as `InvalidData` instead of being masked.

use crate::db::DbError;
use crate::model::validate::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod doctor_repo;
pub mod patient_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure surfaced to callers; the session stays usable.
#[derive(Debug)]
pub enum RepoError {
    /// The store rejected the statement (constraint, I/O, locked database...).
    Db(DbError),
    /// A persisted row does not fit the typed model.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn parse_record_id(value: i64, table: &str) -> RepoResult<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(RepoError::InvalidData(format!(
            "non-positive id `{value}` in {table}.id"
        )))
    }
}

pub(crate) fn invalid_row(table: &str, id: i64, err: ValidationError) -> RepoError {
    RepoError::InvalidData(format!("{table} row id={id}: {err}"))
}
