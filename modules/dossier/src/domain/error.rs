use thiserror::Error;

use crate::domain::repo::RepoError;

/// Domain errors of the dossier aggregate.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("dossier {id} not found")]
    NotFound { id: i64 },

    #[error("patient {id} not found")]
    PatientNotFound { id: i64 },

    /// The patient service could not answer; distinct from a clean
    /// not-found so callers see 502, not 404.
    #[error("patient service unavailable: {reason}")]
    PatientUnavailable { reason: String },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl From<RepoError> for DomainError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Missing { id } => DomainError::NotFound { id },
            RepoError::Storage { message } => DomainError::Storage { message },
        }
    }
}
