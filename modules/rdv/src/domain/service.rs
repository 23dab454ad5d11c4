use std::sync::Arc;

use tracing::{info, instrument};

use clininet_lookup::{ExistenceLookup, LookupError, LookupOutcome};

use crate::domain::error::DomainError;
use crate::domain::model::{NewRdv, Rdv};
use crate::domain::repo::RdvRepository;

/// Write validator and query front of the rdv aggregate.
///
/// Two remote checks guard every create: patient first, then medecin. On
/// update the rdv itself is resolved before either remote check. The first
/// failure aborts the whole operation; stored reference fields carry the
/// ids echoed by the owning services.
#[derive(Clone)]
pub struct RdvService {
    repo: Arc<dyn RdvRepository>,
    patients: Arc<dyn ExistenceLookup>,
    medecins: Arc<dyn ExistenceLookup>,
}

impl RdvService {
    pub fn new(
        repo: Arc<dyn RdvRepository>,
        patients: Arc<dyn ExistenceLookup>,
        medecins: Arc<dyn ExistenceLookup>,
    ) -> Self {
        Self {
            repo,
            patients,
            medecins,
        }
    }

    async fn resolve_patient(&self, patient_id: i64) -> Result<i64, DomainError> {
        match self.patients.exists(patient_id).await {
            Ok(LookupOutcome::Found { id }) => Ok(id),
            Ok(LookupOutcome::Absent) => Err(DomainError::PatientNotFound { id: patient_id }),
            Err(LookupError::Upstream { service, reason }) => {
                Err(DomainError::UpstreamUnavailable { service, reason })
            }
        }
    }

    async fn resolve_medecin(&self, medecin_id: i64) -> Result<i64, DomainError> {
        match self.medecins.exists(medecin_id).await {
            Ok(LookupOutcome::Found { id }) => Ok(id),
            Ok(LookupOutcome::Absent) => Err(DomainError::MedecinNotFound { id: medecin_id }),
            Err(LookupError::Upstream { service, reason }) => {
                Err(DomainError::UpstreamUnavailable { service, reason })
            }
        }
    }

    #[instrument(
        skip(self, new),
        fields(patient_id = new.patient_id, medecin_id = new.medecin_id)
    )]
    pub async fn create(&self, mut new: NewRdv) -> Result<Rdv, DomainError> {
        new.patient_id = self.resolve_patient(new.patient_id).await?;
        new.medecin_id = self.resolve_medecin(new.medecin_id).await?;

        let rdv = self.repo.create(new).await?;
        info!(id = rdv.id, "rdv created");
        Ok(rdv)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Rdv, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    pub async fn list(&self) -> Result<Vec<Rdv>, DomainError> {
        Ok(self.repo.list().await?)
    }

    #[instrument(skip(self, rdv), fields(id = rdv.id))]
    pub async fn update(&self, mut rdv: Rdv) -> Result<Rdv, DomainError> {
        // Order: the rdv itself, then patient, then medecin.
        self.repo
            .find_by_id(rdv.id)
            .await?
            .ok_or(DomainError::NotFound { id: rdv.id })?;

        rdv.patient_id = self.resolve_patient(rdv.patient_id).await?;
        rdv.medecin_id = self.resolve_medecin(rdv.medecin_id).await?;

        let updated = self.repo.update(rdv).await?;
        info!(id = updated.id, "rdv updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound { id });
        }
        info!(id, "rdv deleted");
        Ok(())
    }
}
