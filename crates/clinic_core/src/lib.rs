//! Core domain logic for the clinic records app.
//! Validation rules and persistence live here; front-ends only collect input
//! and render results.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ClinicConfig, ConfigError};
pub use db::{ensure_schema, open_db, open_db_in_memory, DbError, SchemaError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::doctor::{Doctor, RawDoctor};
pub use model::patient::{Gender, Patient, RawPatient};
pub use model::record::{RecordId, Stored};
pub use model::validate::{validate_doctor, validate_patient, Field, ValidationError};
pub use repo::doctor_repo::{DoctorRepository, SqliteDoctorRepository};
pub use repo::patient_repo::{PatientRepository, SqlitePatientRepository};
pub use repo::{RepoError, RepoResult};
pub use service::clinic_service::{ClinicService, ServiceError, ServiceResult};

