//! Fixed-width table rendering for listings.
//!
//! Columns are left-aligned and padded, never truncated.

use clinic_core::{Doctor, Patient, Stored};

pub fn render_patients(patients: &[Stored<Patient>]) -> String {
    let mut out = String::from("\n-- Patients List --\n");
    push_row(
        &mut out,
        format!(
            "{:<5} {:<20} {:<5} {:<10} {:<15}",
            "ID", "Name", "Age", "Gender", "Phone"
        ),
    );

    if patients.is_empty() {
        out.push_str("No patients found.\n");
    }
    for stored in patients {
        let patient = &stored.record;
        push_row(
            &mut out,
            format!(
                "{:<5} {:<20} {:<5} {:<10} {:<15}",
                stored.id,
                patient.name(),
                patient.age(),
                patient.gender().code(),
                patient.phone()
            ),
        );
    }
    out
}

pub fn render_doctors(doctors: &[Stored<Doctor>]) -> String {
    let mut out = String::from("\n-- Doctors List --\n");
    push_row(
        &mut out,
        format!("{:<5} {:<20} {:<20} {:<15}", "ID", "Name", "Specialty", "Phone"),
    );

    if doctors.is_empty() {
        out.push_str("No doctors found.\n");
    }
    for stored in doctors {
        let doctor = &stored.record;
        push_row(
            &mut out,
            format!(
                "{:<5} {:<20} {:<20} {:<15}",
                stored.id,
                doctor.name(),
                doctor.specialty(),
                doctor.phone()
            ),
        );
    }
    out
}

fn push_row(out: &mut String, row: String) {
    out.push_str(row.trim_end());
    out.push('\n');
}
