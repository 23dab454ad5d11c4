use std::sync::Arc;

use tracing::{info, instrument};

use clininet_lookup::{ExistenceLookup, LookupError, LookupOutcome};

use crate::domain::error::DomainError;
use crate::domain::model::{Dossier, NewDossier};
use crate::domain::repo::DossierRepository;

/// Write validator and query front of the dossier aggregate.
///
/// Creation verifies the referenced patient through one synchronous lookup
/// before anything is persisted. On update the dossier itself is resolved
/// first, then the patient. First failure wins; nothing partial is written.
#[derive(Clone)]
pub struct DossierService {
    repo: Arc<dyn DossierRepository>,
    patients: Arc<dyn ExistenceLookup>,
}

impl DossierService {
    pub fn new(repo: Arc<dyn DossierRepository>, patients: Arc<dyn ExistenceLookup>) -> Self {
        Self { repo, patients }
    }

    async fn resolve_patient(&self, patient_id: i64) -> Result<i64, DomainError> {
        match self.patients.exists(patient_id).await {
            Ok(LookupOutcome::Found { id }) => Ok(id),
            Ok(LookupOutcome::Absent) => Err(DomainError::PatientNotFound { id: patient_id }),
            Err(LookupError::Upstream { reason, .. }) => {
                Err(DomainError::PatientUnavailable { reason })
            }
        }
    }

    #[instrument(skip(self, new), fields(patient_id = new.patient_id))]
    pub async fn create(&self, mut new: NewDossier) -> Result<Dossier, DomainError> {
        // The stored reference is the id the patient service echoed back,
        // not the caller-supplied value.
        new.patient_id = self.resolve_patient(new.patient_id).await?;

        let dossier = self.repo.create(new).await?;
        info!(id = dossier.id, "dossier created");
        Ok(dossier)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Dossier, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    pub async fn list(&self) -> Result<Vec<Dossier>, DomainError> {
        Ok(self.repo.list().await?)
    }

    #[instrument(skip(self, dossier), fields(id = dossier.id))]
    pub async fn update(&self, mut dossier: Dossier) -> Result<Dossier, DomainError> {
        // The dossier must exist before the remote check runs.
        self.repo
            .find_by_id(dossier.id)
            .await?
            .ok_or(DomainError::NotFound { id: dossier.id })?;

        dossier.patient_id = self.resolve_patient(dossier.patient_id).await?;

        let updated = self.repo.update(dossier).await?;
        info!(id = updated.id, "dossier updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound { id });
        }
        info!(id, "dossier deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryDossierRepo;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Lookup stub with a fixed answer, counting calls.
    struct StubLookup {
        answer: Result<LookupOutcome, ()>,
        calls: AtomicUsize,
    }

    impl StubLookup {
        fn found(id: i64) -> Arc<Self> {
            Arc::new(Self {
                answer: Ok(LookupOutcome::Found { id }),
                calls: AtomicUsize::new(0),
            })
        }

        fn absent() -> Arc<Self> {
            Arc::new(Self {
                answer: Ok(LookupOutcome::Absent),
                calls: AtomicUsize::new(0),
            })
        }

        fn unavailable() -> Arc<Self> {
            Arc::new(Self {
                answer: Err(()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ExistenceLookup for StubLookup {
        async fn exists(&self, _id: i64) -> Result<LookupOutcome, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.answer {
                Ok(outcome) => Ok(*outcome),
                Err(()) => Err(LookupError::Upstream {
                    service: "patient".to_owned(),
                    reason: "connection refused".to_owned(),
                }),
            }
        }
    }

    fn new_dossier(patient_id: i64) -> NewDossier {
        NewDossier {
            consultation_date: NaiveDate::from_ymd_opt(2024, 3, 12).expect("valid date"),
            report: Some("Consultation de routine".to_owned()),
            patient_id,
        }
    }

    fn service(patients: Arc<StubLookup>) -> DossierService {
        DossierService::new(Arc::new(InMemoryDossierRepo::default()), patients)
    }

    #[tokio::test]
    async fn create_stores_the_echoed_patient_id() {
        // The lookup echoes a normalized id; the store must carry that one.
        let svc = service(StubLookup::found(7));
        let created = svc.create(new_dossier(7)).await.expect("create");
        assert_eq!(created.patient_id, 7);

        let fetched = svc.get(created.id).await.expect("get");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_overwrites_caller_supplied_reference_with_echo() {
        let lookup = StubLookup::found(42);
        let svc = service(Arc::clone(&lookup));

        // Caller says 41; the remote echo wins.
        let created = svc.create(new_dossier(41)).await.expect("create");
        assert_eq!(created.patient_id, 42);
        assert_eq!(lookup.calls(), 1);
    }

    #[tokio::test]
    async fn absent_patient_fails_create_and_persists_nothing() {
        let svc = service(StubLookup::absent());
        let err = svc.create(new_dossier(5)).await.expect_err("no patient");
        assert!(matches!(err, DomainError::PatientNotFound { id: 5 }));

        assert!(svc.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn unreachable_patient_service_is_not_a_not_found() {
        let svc = service(StubLookup::unavailable());
        let err = svc.create(new_dossier(5)).await.expect_err("upstream down");
        assert!(matches!(err, DomainError::PatientUnavailable { .. }));

        assert!(svc.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn update_resolves_dossier_before_patient_lookup() {
        let lookup = StubLookup::found(1);
        let svc = service(Arc::clone(&lookup));

        let ghost = new_dossier(1).with_id(99);
        let err = svc.update(ghost).await.expect_err("missing dossier");
        assert!(matches!(err, DomainError::NotFound { id: 99 }));
        // The remote check never ran.
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_revalidates_patient() {
        let lookup = StubLookup::found(7);
        let svc = service(Arc::clone(&lookup));
        let created = svc.create(new_dossier(7)).await.expect("create");

        let mut changed = created.clone();
        changed.report = None;
        changed.consultation_date = NaiveDate::from_ymd_opt(2024, 4, 2).expect("valid date");

        let updated = svc.update(changed.clone()).await.expect("update");
        assert_eq!(updated, changed);
        // One lookup for create, one for update.
        assert_eq!(lookup.calls(), 2);
    }

    #[tokio::test]
    async fn delete_does_no_remote_checks() {
        let lookup = StubLookup::found(7);
        let svc = service(Arc::clone(&lookup));
        let created = svc.create(new_dossier(7)).await.expect("create");
        let calls_after_create = lookup.calls();

        svc.delete(created.id).await.expect("delete");
        assert_eq!(lookup.calls(), calls_after_create);

        assert!(matches!(
            svc.delete(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
