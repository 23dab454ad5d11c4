//! Medecin aggregate service.
//!
//! Owns the practitioner records of the clinic network. Same write
//! discipline as the patient service: email and phone are unique within the
//! aggregate, checked before and enforced during every mutation.

pub mod api;
pub mod domain;
pub mod infra;

pub use api::rest::routes::{router, MedecinState};
