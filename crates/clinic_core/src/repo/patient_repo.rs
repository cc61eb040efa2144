//! Patient repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert validated patients and list all stored patients.
//!
//! # Invariants
//! - `insert` returns the id generated by SQLite for the new row.
//! - `list_all` orders by `id ASC`; an empty table yields an empty vec.
//! - Stored rows must pass `validate_patient`; NULL text reads as empty and fails.

use crate::model::patient::Patient;
use crate::model::record::{RecordId, Stored};
use crate::model::validate::validate_patient;
use crate::repo::{invalid_row, parse_record_id, RepoResult};
use rusqlite::{params, Connection, Row};

const PATIENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    age,
    gender,
    phone
FROM patients
ORDER BY id ASC;";

/// Repository interface for patient records.
pub trait PatientRepository {
    fn insert(&self, patient: &Patient) -> RepoResult<RecordId>;
    fn list_all(&self) -> RepoResult<Vec<Stored<Patient>>>;
}

/// SQLite-backed patient repository.
pub struct SqlitePatientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePatientRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PatientRepository for SqlitePatientRepository<'_> {
    fn insert(&self, patient: &Patient) -> RepoResult<RecordId> {
        self.conn.execute(
            "INSERT INTO patients (name, age, gender, phone) VALUES (?1, ?2, ?3, ?4);",
            params![
                patient.name(),
                patient.age(),
                patient.gender().code(),
                patient.phone(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> RepoResult<Vec<Stored<Patient>>> {
        let mut stmt = self.conn.prepare(PATIENT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut patients = Vec::new();

        while let Some(row) = rows.next()? {
            patients.push(parse_patient_row(row)?);
        }

        Ok(patients)
    }
}

fn parse_patient_row(row: &Row<'_>) -> RepoResult<Stored<Patient>> {
    let id = parse_record_id(row.get("id")?, "patients")?;
    let name: Option<String> = row.get("name")?;
    let age: i64 = row.get("age")?;
    let gender: Option<String> = row.get("gender")?;
    let phone: Option<String> = row.get("phone")?;

    let patient = validate_patient(
        name.as_deref().unwrap_or_default(),
        &age.to_string(),
        gender.as_deref().unwrap_or_default(),
        phone.as_deref().unwrap_or_default(),
    )
    .map_err(|err| invalid_row("patients", id, err))?;

    Ok(Stored::new(id, patient))
}

#[cfg(test)]
mod tests {
    use super::{PatientRepository, SqlitePatientRepository};
    use crate::db::open_db_in_memory;
    use crate::model::patient::Gender;
    use crate::repo::RepoError;
    use rusqlite::Connection;

    fn insert_raw(conn: &Connection, name: &str, age: i64, gender: Option<&str>, phone: Option<&str>) {
        conn.execute(
            "INSERT INTO patients (name, age, gender, phone) VALUES (?1, ?2, ?3, ?4);",
            rusqlite::params![name, age, gender, phone],
        )
        .unwrap();
    }

    fn list_error(conn: &Connection) -> String {
        match SqlitePatientRepository::new(conn).list_all().unwrap_err() {
            RepoError::InvalidData(message) => message,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn list_rejects_unknown_gender_code() {
        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, "Legacy", 40, Some("x"), Some("0123456789"));

        let message = list_error(&conn);
        assert!(message.contains("patients row id=1"));
        assert!(message.contains("Gender must be 'M' or 'F' only."));
    }

    #[test]
    fn list_normalizes_lower_case_gender_like_fresh_input() {
        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, "Valid", 20, Some("F"), Some("0123456789"));
        insert_raw(&conn, "Legacy", 40, Some("m"), Some("0123456789"));

        let listed = SqlitePatientRepository::new(&conn).list_all().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].record.gender(), Gender::Male);
    }

    #[test]
    fn list_rejects_negative_age() {
        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, "Legacy", -3, Some("M"), Some("0123456789"));

        assert!(list_error(&conn).contains("Age must be a non-negative integer."));
    }

    #[test]
    fn list_rejects_null_or_malformed_phone() {
        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, "Legacy", 3, Some("F"), None);
        assert!(list_error(&conn).contains("phone is empty"));

        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, "Legacy", 3, Some("F"), Some("123"));
        assert!(list_error(&conn).contains("Phone number must be exactly 10 digits."));
    }
}
