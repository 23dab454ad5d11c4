use async_trait::async_trait;

use crate::domain::model::{NewRdv, Rdv};

/// Errors surfaced by an rdv store.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("no record with id {id}")]
    Missing { id: i64 },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

/// Persistence seam for the rdv aggregate. No uniqueness invariants.
#[async_trait]
pub trait RdvRepository: Send + Sync {
    /// Assigns the identity and persists the record.
    async fn create(&self, new: NewRdv) -> Result<Rdv, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Rdv>, RepoError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Rdv>, RepoError>;

    /// Replace all mutable fields of the record with `rdv.id`.
    async fn update(&self, rdv: Rdv) -> Result<Rdv, RepoError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
