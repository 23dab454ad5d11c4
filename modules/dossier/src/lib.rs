//! Dossier aggregate service.
//!
//! A dossier references a patient owned by another service. The reference
//! is verified at write time through the injected existence lookup; after a
//! successful check the stored `patient_id` is the id echoed by the patient
//! service, never the raw caller input.

pub mod api;
pub mod domain;
pub mod infra;

pub use api::rest::routes::{router, DossierState};
