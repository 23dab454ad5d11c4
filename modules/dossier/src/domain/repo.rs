use async_trait::async_trait;

use crate::domain::model::{Dossier, NewDossier};

/// Errors surfaced by a dossier store.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("no record with id {id}")]
    Missing { id: i64 },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

/// Persistence seam for the dossier aggregate. No uniqueness invariants.
#[async_trait]
pub trait DossierRepository: Send + Sync {
    /// Assigns the identity and persists the record.
    async fn create(&self, new: NewDossier) -> Result<Dossier, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Dossier>, RepoError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Dossier>, RepoError>;

    /// Replace all mutable fields of the record with `dossier.id`.
    async fn update(&self, dossier: Dossier) -> Result<Dossier, RepoError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
