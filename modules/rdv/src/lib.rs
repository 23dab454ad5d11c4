//! Rdv (appointment) aggregate service.
//!
//! An rdv references a patient and a medecin, both owned by other services.
//! Both references are verified at write time, patient first, then medecin;
//! the first failure aborts the write.

pub mod api;
pub mod domain;
pub mod infra;

pub use api::rest::routes::{router, RdvState};
