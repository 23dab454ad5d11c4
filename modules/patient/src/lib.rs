//! Patient aggregate service.
//!
//! Owns the Patient records of the clinic network and enforces the
//! email/phone uniqueness invariants at write time. Other services never
//! touch this store directly; they go through the REST surface.

pub mod api;
pub mod domain;
pub mod infra;

pub use api::rest::routes::{router, PatientState};
