//! Interactive numbered menu.
//!
//! # Responsibility
//! - Read raw lines, forward them to `ClinicService`, print results.
//!
//! # Invariants
//! - Validation and store errors are printed and the menu continues.
//! - End of input behaves like choosing "Exit".

use crate::table::{render_doctors, render_patients};
use clinic_core::{ClinicService, DoctorRepository, PatientRepository, RawDoctor, RawPatient};
use std::io::{self, BufRead, Write};

const MENU: &str = "\nClinic Management System
1. Add Patient
2. List Patients
3. Add Doctor
4. List Doctors
5. Exit
Choose an option: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddPatient,
    ListPatients,
    AddDoctor,
    ListDoctors,
    Exit,
}

impl Choice {
    fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::AddPatient),
            2 => Some(Self::ListPatients),
            3 => Some(Self::AddDoctor),
            4 => Some(Self::ListDoctors),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Console session over any line source and sink.
pub struct Menu<'svc, P: PatientRepository, D: DoctorRepository, R, W> {
    service: &'svc ClinicService<P, D>,
    input: R,
    output: W,
}

impl<'svc, P, D, R, W> Menu<'svc, P, D, R, W>
where
    P: PatientRepository,
    D: DoctorRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(service: &'svc ClinicService<P, D>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs until "Exit" is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                return Ok(());
            };

            let choice = match line.trim().parse::<i64>() {
                Ok(number) => Choice::from_number(number),
                Err(_) => {
                    writeln!(self.output, "Invalid input, enter a number.")?;
                    continue;
                }
            };

            let keep_going = match choice {
                Some(Choice::AddPatient) => self.add_patient()?,
                Some(Choice::ListPatients) => self.list_patients()?,
                Some(Choice::AddDoctor) => self.add_doctor()?,
                Some(Choice::ListDoctors) => self.list_doctors()?,
                Some(Choice::Exit) => false,
                None => {
                    writeln!(self.output, "Invalid option, try again.")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    fn add_patient(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Enter patient name: ")? else {
            return Ok(false);
        };
        let Some(age) = self.prompt("Enter patient age: ")? else {
            return Ok(false);
        };
        let Some(gender) = self.prompt("Enter patient gender (M/F): ")? else {
            return Ok(false);
        };
        let Some(phone) = self.prompt("Enter patient phone (10 digits): ")? else {
            return Ok(false);
        };

        let raw = RawPatient {
            name,
            age,
            gender,
            phone,
        };
        match self.service.add_patient(&raw) {
            Ok(id) => writeln!(self.output, "Patient added successfully (id {id}).")?,
            Err(err) => writeln!(self.output, "Failed to add patient: {err}")?,
        }
        Ok(true)
    }

    fn list_patients(&mut self) -> io::Result<bool> {
        match self.service.list_patients() {
            Ok(patients) => write!(self.output, "{}", render_patients(&patients))?,
            Err(err) => writeln!(self.output, "Failed to load patients: {err}")?,
        }
        Ok(true)
    }

    fn add_doctor(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Enter doctor name: ")? else {
            return Ok(false);
        };
        let Some(specialty) = self.prompt("Enter doctor specialty: ")? else {
            return Ok(false);
        };
        let Some(phone) = self.prompt("Enter doctor phone (10 digits): ")? else {
            return Ok(false);
        };

        let raw = RawDoctor {
            name,
            specialty,
            phone,
        };
        match self.service.add_doctor(&raw) {
            Ok(id) => writeln!(self.output, "Doctor added successfully (id {id}).")?,
            Err(err) => writeln!(self.output, "Failed to add doctor: {err}")?,
        }
        Ok(true)
    }

    fn list_doctors(&mut self) -> io::Result<bool> {
        match self.service.list_doctors() {
            Ok(doctors) => write!(self.output, "{}", render_doctors(&doctors))?,
            Err(err) => writeln!(self.output, "Failed to load doctors: {err}")?,
        }
        Ok(true)
    }

    /// Prints `label` and reads one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::Menu;
    use clinic_core::{
        open_db_in_memory, ClinicService, SqliteDoctorRepository, SqlitePatientRepository,
    };
    use rusqlite::Connection;
    use std::io::Cursor;

    fn run_session(conn: &Connection, script: &str) -> String {
        let service = ClinicService::new(
            SqlitePatientRepository::new(conn),
            SqliteDoctorRepository::new(conn),
        );
        let mut output = Vec::new();
        Menu::new(&service, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn add_then_list_patient() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "1\nAsha Rao\n34\nf\n9876543210\n2\n5\n");

        assert!(output.contains("Patient added successfully (id 1)."));
        assert!(output.contains("-- Patients List --"));
        assert!(output.contains("Asha Rao"));
        assert!(output.contains("9876543210"));
    }

    #[test]
    fn validation_error_is_reported_and_menu_continues() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "3\nDr. Lee\n\n5551234567\n4\n5\n");

        assert!(output.contains("Failed to add doctor: Please fill all fields (specialty is empty)."));
        assert!(output.contains("No doctors found."));
    }

    #[test]
    fn bad_menu_input_reprompts() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "abc\n9\n5\n");

        assert!(output.contains("Invalid input, enter a number."));
        assert!(output.contains("Invalid option, try again."));
        assert_eq!(output.matches("Choose an option: ").count(), 3);
    }

    #[test]
    fn end_of_input_mid_form_exits_without_insert() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "1\nAsha Rao\n");

        assert!(!output.contains("Patient added"));
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM patients;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "3\r\nDr. Lee\r\nCardiology\r\n5551234567\r\n5\r\n");

        assert!(output.contains("Doctor added successfully (id 1)."));
    }
}
