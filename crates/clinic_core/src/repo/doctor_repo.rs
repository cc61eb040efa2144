//! Doctor repository contract and SQLite implementation.
//!
//! # Invariants
//! - `insert` returns the id generated by SQLite for the new row.
//! - `list_all` orders by `id ASC`; an empty table yields an empty vec.
//! - Stored rows must pass `validate_doctor`; NULL text reads as empty and fails.

use crate::model::doctor::Doctor;
use crate::model::record::{RecordId, Stored};
use crate::model::validate::validate_doctor;
use crate::repo::{invalid_row, parse_record_id, RepoResult};
use rusqlite::{params, Connection, Row};

const DOCTOR_SELECT_SQL: &str = "SELECT
    id,
    name,
    specialty,
    phone
FROM doctors
ORDER BY id ASC;";

/// Repository interface for doctor records.
pub trait DoctorRepository {
    fn insert(&self, doctor: &Doctor) -> RepoResult<RecordId>;
    fn list_all(&self) -> RepoResult<Vec<Stored<Doctor>>>;
}

/// SQLite-backed doctor repository.
pub struct SqliteDoctorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDoctorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DoctorRepository for SqliteDoctorRepository<'_> {
    fn insert(&self, doctor: &Doctor) -> RepoResult<RecordId> {
        self.conn.execute(
            "INSERT INTO doctors (name, specialty, phone) VALUES (?1, ?2, ?3);",
            params![doctor.name(), doctor.specialty(), doctor.phone()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> RepoResult<Vec<Stored<Doctor>>> {
        let mut stmt = self.conn.prepare(DOCTOR_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut doctors = Vec::new();

        while let Some(row) = rows.next()? {
            doctors.push(parse_doctor_row(row)?);
        }

        Ok(doctors)
    }
}

fn parse_doctor_row(row: &Row<'_>) -> RepoResult<Stored<Doctor>> {
    let id = parse_record_id(row.get("id")?, "doctors")?;
    let name: Option<String> = row.get("name")?;
    let specialty: Option<String> = row.get("specialty")?;
    let phone: Option<String> = row.get("phone")?;

    let doctor = validate_doctor(
        name.as_deref().unwrap_or_default(),
        specialty.as_deref().unwrap_or_default(),
        phone.as_deref().unwrap_or_default(),
    )
    .map_err(|err| invalid_row("doctors", id, err))?;

    Ok(Stored::new(id, doctor))
}

#[cfg(test)]
mod tests {
    use super::{DoctorRepository, SqliteDoctorRepository};
    use crate::db::open_db_in_memory;
    use crate::repo::RepoError;
    use rusqlite::Connection;

    fn insert_raw(conn: &Connection, name: &str, specialty: Option<&str>, phone: Option<&str>) {
        conn.execute(
            "INSERT INTO doctors (name, specialty, phone) VALUES (?1, ?2, ?3);",
            rusqlite::params![name, specialty, phone],
        )
        .unwrap();
    }

    fn list_error(conn: &Connection) -> String {
        match SqliteDoctorRepository::new(conn).list_all().unwrap_err() {
            RepoError::InvalidData(message) => message,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn list_rejects_null_specialty() {
        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, "X", None, Some("5551234567"));

        let message = list_error(&conn);
        assert!(message.contains("doctors row id=1"));
        assert!(message.contains("specialty is empty"));
    }

    #[test]
    fn list_rejects_phone_that_is_not_ten_digits() {
        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, "X", Some("General"), Some("abc"));

        assert!(list_error(&conn).contains("Phone number must be exactly 10 digits."));
    }

    #[test]
    fn list_rejects_null_phone() {
        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, "X", Some("General"), None);

        assert!(list_error(&conn).contains("phone is empty"));
    }

    #[test]
    fn list_returns_rows_that_pass_validation_trimmed() {
        let conn = open_db_in_memory().unwrap();
        insert_raw(&conn, " Dr. Lee ", Some("Cardiology"), Some("5551234567"));

        let listed = SqliteDoctorRepository::new(&conn).list_all().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 1);
        assert_eq!(listed[0].record.name(), "Dr. Lee");
        assert_eq!(listed[0].record.specialty(), "Cardiology");
    }
}
