use async_trait::async_trait;

use crate::domain::model::{Medecin, NewMedecin};

/// Fields carrying a uniqueness invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Phone,
}

/// Errors surfaced by a medecin store.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{field:?} '{value}' already bound to another record")]
    UniqueViolation { field: UniqueField, value: String },

    #[error("no record with id {id}")]
    Missing { id: i64 },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

/// Persistence seam for the medecin aggregate.
#[async_trait]
pub trait MedecinRepository: Send + Sync {
    /// Assigns the identity and persists the record.
    async fn create(&self, new: NewMedecin) -> Result<Medecin, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Medecin>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Medecin>, RepoError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Medecin>, RepoError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Medecin>, RepoError>;

    /// Replace all mutable fields of the record with `medecin.id`.
    async fn update(&self, medecin: Medecin) -> Result<Medecin, RepoError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
