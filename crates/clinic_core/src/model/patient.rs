//! Patient domain model.
//!
//! # Responsibility
//! - Define the canonical patient record and its gender code.
//!
//! # Invariants
//! - `name` is non-empty and trimmed.
//! - `phone` is exactly 10 ASCII digits, kept as text to preserve leading zeros.
//! - Values are built by `validate_patient` or by the repository read path.
//!
//! # See also
//! - `model::validate`

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Patient gender as stored in `patients.gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single-letter storage code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Parses an already-normalized (upper-case, trimmed) code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Validated patient record, without a store identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    name: String,
    age: u32,
    gender: Gender,
    phone: String,
}

impl Patient {
    pub(crate) fn from_parts(name: String, age: u32, gender: Gender, phone: String) -> Self {
        Self {
            name,
            age,
            gender,
            phone,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Unvalidated patient form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPatient {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
}
