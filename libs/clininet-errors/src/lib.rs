//! Error surface shared by every CliniNet service.
//!
//! HTTP error bodies are RFC 9457 Problem Details documents. Each domain
//! error kind has a static [`catalog::ErrDef`] (status, title, machine code)
//! and a localized detail template in [`catalog::MessageCatalog`].

pub mod catalog;
pub mod problem;

pub use catalog::{ErrDef, Locale, MessageCatalog};
pub use problem::{Problem, ValidationViolation, APPLICATION_PROBLEM_JSON};
