//! Raw-input validation for clinic records.
//!
//! # Responsibility
//! - Turn raw form/console strings into typed `Patient`/`Doctor` values.
//! - Report the first violated rule as a `ValidationError`.
//!
//! # Invariants
//! - Pure and deterministic: no I/O, no logging, same input -> same output.
//! - Rules run in a fixed order; the empty-field check always wins first.
//! - Doctors get the strict ruleset (non-empty specialty, 10-digit phone).

use crate::model::doctor::{Doctor, RawDoctor};
use crate::model::patient::{Gender, Patient, RawPatient};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

// `\d` would also accept non-ASCII digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// Form field named by `ValidationError::EmptyField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Gender,
    Phone,
    Specialty,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::Specialty => "specialty",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is empty after trimming.
    EmptyField(Field),
    /// Age is not a base-10 integer, or is negative / out of range.
    InvalidAge,
    /// Gender is not `M` or `F` after normalization.
    InvalidGender,
    /// Phone is not exactly 10 decimal digits.
    InvalidPhone,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Please fill all fields ({field} is empty)."),
            Self::InvalidAge => f.write_str("Age must be a non-negative integer."),
            Self::InvalidGender => f.write_str("Gender must be 'M' or 'F' only."),
            Self::InvalidPhone => f.write_str("Phone number must be exactly 10 digits."),
        }
    }
}

impl Error for ValidationError {}

/// Validates raw patient input.
///
/// Rule order: empty fields (name, age, gender, phone), age, gender, phone.
/// On success `name`/`phone` are trimmed and `gender` is upper-cased.
pub fn validate_patient(
    raw_name: &str,
    raw_age: &str,
    raw_gender: &str,
    raw_phone: &str,
) -> Result<Patient, ValidationError> {
    let name = non_empty(raw_name, Field::Name)?;
    let age = non_empty(raw_age, Field::Age)?;
    let gender = non_empty(raw_gender, Field::Gender)?;
    let phone = non_empty(raw_phone, Field::Phone)?;

    let age = parse_age(age)?;
    let gender =
        Gender::from_code(&gender.to_uppercase()).ok_or(ValidationError::InvalidGender)?;
    check_phone(phone)?;

    Ok(Patient::from_parts(
        name.to_string(),
        age,
        gender,
        phone.to_string(),
    ))
}

/// Validates raw doctor input.
///
/// Rule order: empty fields (name, specialty, phone), phone format.
pub fn validate_doctor(
    raw_name: &str,
    raw_specialty: &str,
    raw_phone: &str,
) -> Result<Doctor, ValidationError> {
    let name = non_empty(raw_name, Field::Name)?;
    let specialty = non_empty(raw_specialty, Field::Specialty)?;
    let phone = non_empty(raw_phone, Field::Phone)?;
    check_phone(phone)?;

    Ok(Doctor::from_parts(
        name.to_string(),
        specialty.to_string(),
        phone.to_string(),
    ))
}

impl RawPatient {
    pub fn validate(&self) -> Result<Patient, ValidationError> {
        validate_patient(&self.name, &self.age, &self.gender, &self.phone)
    }
}

impl RawDoctor {
    pub fn validate(&self) -> Result<Doctor, ValidationError> {
        validate_doctor(&self.name, &self.specialty, &self.phone)
    }
}

// Strips ASCII control characters and spaces only; U+00A0 and other Unicode
// whitespace stay part of the value.
fn trim_field(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

fn non_empty(raw: &str, field: Field) -> Result<&str, ValidationError> {
    let trimmed = trim_field(raw);
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed)
}

fn parse_age(value: &str) -> Result<u32, ValidationError> {
    let parsed: i64 = value.parse().map_err(|_| ValidationError::InvalidAge)?;
    u32::try_from(parsed).map_err(|_| ValidationError::InvalidAge)
}

fn check_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}
