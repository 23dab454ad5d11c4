use thiserror::Error;

use crate::domain::repo::{RepoError, UniqueField};

/// Domain errors of the medecin aggregate.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("medecin {id} not found")]
    NotFound { id: i64 },

    #[error("email '{email}' already in use")]
    EmailExists { email: String },

    #[error("phone '{phone}' already in use")]
    PhoneExists { phone: String },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl From<RepoError> for DomainError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::UniqueViolation {
                field: UniqueField::Email,
                value,
            } => DomainError::EmailExists { email: value },
            RepoError::UniqueViolation {
                field: UniqueField::Phone,
                value,
            } => DomainError::PhoneExists { phone: value },
            RepoError::Missing { id } => DomainError::NotFound { id },
            RepoError::Storage { message } => DomainError::Storage { message },
        }
    }
}
