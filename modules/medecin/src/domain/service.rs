use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::{Medecin, NewMedecin};
use crate::domain::repo::MedecinRepository;

/// Write validator and query front of the medecin aggregate.
#[derive(Clone)]
pub struct MedecinService {
    repo: Arc<dyn MedecinRepository>,
}

impl MedecinService {
    pub fn new(repo: Arc<dyn MedecinRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn create(&self, new: NewMedecin) -> Result<Medecin, DomainError> {
        if self.repo.find_by_email(&new.email).await?.is_some() {
            return Err(DomainError::EmailExists { email: new.email });
        }
        if self.repo.find_by_phone(&new.phone).await?.is_some() {
            return Err(DomainError::PhoneExists { phone: new.phone });
        }

        let medecin = self.repo.create(new).await?;
        info!(id = medecin.id, "medecin created");
        Ok(medecin)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Medecin, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    pub async fn list(&self) -> Result<Vec<Medecin>, DomainError> {
        Ok(self.repo.list().await?)
    }

    #[instrument(skip(self, medecin), fields(id = medecin.id))]
    pub async fn update(&self, medecin: Medecin) -> Result<Medecin, DomainError> {
        self.repo
            .find_by_id(medecin.id)
            .await?
            .ok_or(DomainError::NotFound { id: medecin.id })?;

        if let Some(existing) = self.repo.find_by_email(&medecin.email).await? {
            if existing.id != medecin.id {
                return Err(DomainError::EmailExists {
                    email: medecin.email,
                });
            }
        }
        if let Some(existing) = self.repo.find_by_phone(&medecin.phone).await? {
            if existing.id != medecin.id {
                return Err(DomainError::PhoneExists {
                    phone: medecin.phone,
                });
            }
        }

        let updated = self.repo.update(medecin).await?;
        info!(id = updated.id, "medecin updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound { id });
        }
        info!(id, "medecin deleted");
        Ok(())
    }
}
