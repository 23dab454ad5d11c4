use async_trait::async_trait;

use crate::domain::model::{NewPatient, Patient};

/// Fields carrying a uniqueness invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Phone,
}

/// Errors surfaced by a patient store.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A uniqueness invariant would be violated. Stores must detect this
    /// atomically with the mutation, not only via the service pre-checks.
    #[error("{field:?} '{value}' already bound to another record")]
    UniqueViolation { field: UniqueField, value: String },

    /// Mutation addressed a record that does not exist.
    #[error("no record with id {id}")]
    Missing { id: i64 },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

/// Persistence seam for the patient aggregate.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Assigns the identity and persists the record.
    async fn create(&self, new: NewPatient) -> Result<Patient, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Patient>, RepoError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Patient>, RepoError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Patient>, RepoError>;

    /// Replace all mutable fields of the record with `patient.id`.
    async fn update(&self, patient: Patient) -> Result<Patient, RepoError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
