//! Doctor domain model.
//!
//! # Invariants
//! - `name` and `specialty` are non-empty and trimmed.
//! - `phone` is exactly 10 ASCII digits.

use serde::Serialize;

/// Validated doctor record, without a store identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    name: String,
    specialty: String,
    phone: String,
}

impl Doctor {
    pub(crate) fn from_parts(name: String, specialty: String, phone: String) -> Self {
        Self {
            name,
            specialty,
            phone,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Unvalidated doctor form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDoctor {
    pub name: String,
    pub specialty: String,
    pub phone: String,
}
