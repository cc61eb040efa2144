//! Clinic use-case service.
//!
//! # Responsibility
//! - Provide the validate-then-insert and list entry points every front-end drives.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Nothing reaches a repository without passing `model::validate` first.
//! - Service calls are stateless; callers may interleave them freely.
//! - Raw field values are never logged.

use crate::model::doctor::{Doctor, RawDoctor};
use crate::model::patient::{Patient, RawPatient};
use crate::model::record::{RecordId, Stored};
use crate::model::validate::ValidationError;
use crate::repo::doctor_repo::DoctorRepository;
use crate::repo::patient_repo::PatientRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for clinic use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input was rejected before touching the store.
    Validation(ValidationError),
    /// The store rejected the operation.
    Repo(RepoError),
}

impl ServiceError {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::EmptyField(_)) => "empty_field",
            Self::Validation(ValidationError::InvalidAge) => "invalid_age",
            Self::Validation(ValidationError::InvalidGender) => "invalid_gender",
            Self::Validation(ValidationError::InvalidPhone) => "invalid_phone",
            Self::Repo(RepoError::Db(_)) => "db_error",
            Self::Repo(RepoError::InvalidData(_)) => "invalid_data",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service over the patient and doctor repositories.
pub struct ClinicService<P: PatientRepository, D: DoctorRepository> {
    patients: P,
    doctors: D,
}

impl<P: PatientRepository, D: DoctorRepository> ClinicService<P, D> {
    pub fn new(patients: P, doctors: D) -> Self {
        Self { patients, doctors }
    }

    /// Validates raw patient input and inserts it.
    ///
    /// Returns the store-generated id of the new row.
    pub fn add_patient(&self, raw: &RawPatient) -> ServiceResult<RecordId> {
        let result = raw
            .validate()
            .map_err(ServiceError::from)
            .and_then(|patient| self.patients.insert(&patient).map_err(Into::into));
        log_add("patient_add", &result);
        result
    }

    /// Lists every stored patient ordered by id.
    pub fn list_patients(&self) -> ServiceResult<Vec<Stored<Patient>>> {
        let result = self.patients.list_all().map_err(ServiceError::from);
        log_list("patient_list", &result);
        result
    }

    /// Validates raw doctor input and inserts it.
    pub fn add_doctor(&self, raw: &RawDoctor) -> ServiceResult<RecordId> {
        let result = raw
            .validate()
            .map_err(ServiceError::from)
            .and_then(|doctor| self.doctors.insert(&doctor).map_err(Into::into));
        log_add("doctor_add", &result);
        result
    }

    /// Lists every stored doctor ordered by id.
    pub fn list_doctors(&self) -> ServiceResult<Vec<Stored<Doctor>>> {
        let result = self.doctors.list_all().map_err(ServiceError::from);
        log_list("doctor_list", &result);
        result
    }
}

fn log_add(event: &str, result: &ServiceResult<RecordId>) {
    match result {
        Ok(id) => info!("event={event} module=service status=ok id={id}"),
        Err(err) => warn!(
            "event={event} module=service status=error error_code={}",
            err.code()
        ),
    }
}

fn log_list<T>(event: &str, result: &ServiceResult<Vec<T>>) {
    match result {
        Ok(items) => info!(
            "event={event} module=service status=ok count={}",
            items.len()
        ),
        Err(err) => warn!(
            "event={event} module=service status=error error_code={}",
            err.code()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{ClinicService, ServiceError};
    use crate::model::doctor::{Doctor, RawDoctor};
    use crate::model::patient::{Patient, RawPatient};
    use crate::model::record::{RecordId, Stored};
    use crate::repo::doctor_repo::DoctorRepository;
    use crate::repo::patient_repo::PatientRepository;
    use crate::repo::{RepoError, RepoResult};
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryPatients {
        rows: RefCell<Vec<Stored<Patient>>>,
    }

    impl PatientRepository for MemoryPatients {
        fn insert(&self, patient: &Patient) -> RepoResult<RecordId> {
            let mut rows = self.rows.borrow_mut();
            let id = rows.len() as RecordId + 1;
            rows.push(Stored::new(id, patient.clone()));
            Ok(id)
        }

        fn list_all(&self) -> RepoResult<Vec<Stored<Patient>>> {
            Ok(self.rows.borrow().clone())
        }
    }

    struct FailingDoctors;

    impl DoctorRepository for FailingDoctors {
        fn insert(&self, _doctor: &Doctor) -> RepoResult<RecordId> {
            Err(RepoError::InvalidData("store offline".to_string()))
        }

        fn list_all(&self) -> RepoResult<Vec<Stored<Doctor>>> {
            Err(RepoError::InvalidData("store offline".to_string()))
        }
    }

    fn service() -> ClinicService<MemoryPatients, FailingDoctors> {
        ClinicService::new(MemoryPatients::default(), FailingDoctors)
    }

    #[test]
    fn add_patient_validates_before_insert() {
        let service = service();
        let raw = RawPatient {
            name: "Asha Rao".to_string(),
            age: "abc".to_string(),
            gender: "f".to_string(),
            phone: "9876543210".to_string(),
        };

        let err = service.add_patient(&raw).unwrap_err();
        assert_eq!(err.code(), "invalid_age");
        assert!(service.list_patients().unwrap().is_empty());
    }

    #[test]
    fn repository_failure_is_surfaced_with_message() {
        let service = service();
        let raw = RawDoctor {
            name: "Dr. Lee".to_string(),
            specialty: "Cardiology".to_string(),
            phone: "5551234567".to_string(),
        };

        let err = service.add_doctor(&raw).unwrap_err();
        assert!(matches!(err, ServiceError::Repo(_)));
        assert!(err.to_string().contains("store offline"));

        let err = service.list_doctors().unwrap_err();
        assert_eq!(err.code(), "invalid_data");
    }
}
