//! Clinic domain model.
//!
//! # Responsibility
//! - Define the typed records persisted by core (`Patient`, `Doctor`).
//! - Own the raw-input validation rules shared by every front-end.
//!
//! # Invariants
//! - A `Patient`/`Doctor` value only exists after passing validation.
//! - Identifiers are assigned by the store and only appear on `Stored<T>`.

pub mod doctor;
pub mod patient;
pub mod record;
pub mod validate;
