//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into use-case level APIs.
//! - Keep console/desktop front-ends decoupled from storage details.

pub mod clinic_service;
