use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::{NewPatient, Patient};
use crate::domain::repo::PatientRepository;

/// Write validator and query front of the patient aggregate.
///
/// Uniqueness checks run before the mutation, email first, then phone,
/// short-circuiting on the first failure. The store revalidates both
/// atomically, so two racing writes cannot both land.
#[derive(Clone)]
pub struct PatientService {
    repo: Arc<dyn PatientRepository>,
}

impl PatientService {
    pub fn new(repo: Arc<dyn PatientRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn create(&self, new: NewPatient) -> Result<Patient, DomainError> {
        if self.repo.find_by_email(&new.email).await?.is_some() {
            return Err(DomainError::EmailExists {
                email: new.email,
            });
        }
        if self.repo.find_by_phone(&new.phone).await?.is_some() {
            return Err(DomainError::PhoneExists {
                phone: new.phone,
            });
        }

        let patient = self.repo.create(new).await?;
        info!(id = patient.id, "patient created");
        Ok(patient)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Patient, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    pub async fn list(&self) -> Result<Vec<Patient>, DomainError> {
        Ok(self.repo.list().await?)
    }

    #[instrument(skip(self, patient), fields(id = patient.id))]
    pub async fn update(&self, patient: Patient) -> Result<Patient, DomainError> {
        self.repo
            .find_by_id(patient.id)
            .await?
            .ok_or(DomainError::NotFound { id: patient.id })?;

        if let Some(existing) = self.repo.find_by_email(&patient.email).await? {
            if existing.id != patient.id {
                return Err(DomainError::EmailExists {
                    email: patient.email,
                });
            }
        }
        if let Some(existing) = self.repo.find_by_phone(&patient.phone).await? {
            if existing.id != patient.id {
                return Err(DomainError::PhoneExists {
                    phone: patient.phone,
                });
            }
        }

        let updated = self.repo.update(patient).await?;
        info!(id = updated.id, "patient updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound { id });
        }
        info!(id, "patient deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryPatientRepo;
    use chrono::NaiveDate;

    fn service() -> PatientService {
        PatientService::new(Arc::new(InMemoryPatientRepo::default()))
    }

    fn new_patient(email: &str, phone: &str) -> NewPatient {
        NewPatient {
            first_name: "Moussa".to_owned(),
            last_name: "Ka".to_owned(),
            birth_date: NaiveDate::from_ymd_opt(1985, 5, 15).expect("valid date"),
            sex: "M".to_owned(),
            address: "123 Rue des Jardins, Dakar".to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
        }
    }

    #[tokio::test]
    async fn create_assigns_identity_and_round_trips() {
        let svc = service();
        let created = svc
            .create(new_patient("moussa.ka@example.com", "771234567"))
            .await
            .expect("create");
        assert!(created.id >= 1);

        let fetched = svc.get(created.id).await.expect("get");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_before_phone_check() {
        let svc = service();
        svc.create(new_patient("a@example.com", "771111111"))
            .await
            .expect("first create");

        // Same email AND same phone: the email check must win.
        let err = svc
            .create(new_patient("a@example.com", "771111111"))
            .await
            .expect_err("duplicate");
        assert!(matches!(err, DomainError::EmailExists { email } if email == "a@example.com"));

        let all = svc.list().await.expect("list");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_phone_is_rejected() {
        let svc = service();
        svc.create(new_patient("a@example.com", "771111111"))
            .await
            .expect("first create");

        let err = svc
            .create(new_patient("b@example.com", "771111111"))
            .await
            .expect_err("duplicate phone");
        assert!(matches!(err, DomainError::PhoneExists { phone } if phone == "771111111"));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let svc = service();
        let created = svc
            .create(new_patient("a@example.com", "771111111"))
            .await
            .expect("create");

        let mut changed = created.clone();
        changed.address = "456 Avenue Liberte, Thies".to_owned();
        changed.phone = "776543219".to_owned();

        let updated = svc.update(changed.clone()).await.expect("update");
        assert_eq!(updated, changed);
        assert_eq!(svc.get(created.id).await.expect("get"), changed);
    }

    #[tokio::test]
    async fn update_is_idempotent_against_itself() {
        let svc = service();
        let created = svc
            .create(new_patient("a@example.com", "771111111"))
            .await
            .expect("create");

        // Same payload twice: the uniqueness checks must not trip on the
        // record itself, and the result must not drift.
        let first = svc.update(created.clone()).await.expect("first update");
        let second = svc.update(created.clone()).await.expect("second update");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn update_rejects_email_of_a_different_record() {
        let svc = service();
        svc.create(new_patient("a@example.com", "771111111"))
            .await
            .expect("create a");
        let b = svc
            .create(new_patient("b@example.com", "772222222"))
            .await
            .expect("create b");

        let mut stolen = b.clone();
        stolen.email = "a@example.com".to_owned();
        let err = svc.update(stolen).await.expect_err("email taken");
        assert!(matches!(err, DomainError::EmailExists { .. }));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = service();
        let ghost = new_patient("a@example.com", "771111111").with_id(999);
        let err = svc.update(ghost).await.expect_err("unknown id");
        assert!(matches!(err, DomainError::NotFound { id: 999 }));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc
            .create(new_patient("a@example.com", "771111111"))
            .await
            .expect("create");

        svc.delete(created.id).await.expect("delete");
        let err = svc.get(created.id).await.expect_err("gone");
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = svc.delete(created.id).await.expect_err("already gone");
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn racing_duplicate_emails_cannot_both_land() {
        // The service pre-check alone leaves a window; the store closes it.
        let svc = service();
        let (a, b) = tokio::join!(
            svc.create(new_patient("race@example.com", "771111111")),
            svc.create(new_patient("race@example.com", "772222222")),
        );
        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1, "exactly one must win");

        let all = svc.list().await.expect("list");
        assert_eq!(all.len(), 1);
    }
}
