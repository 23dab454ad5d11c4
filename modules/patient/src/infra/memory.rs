use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::domain::model::{NewPatient, Patient};
use crate::domain::repo::{PatientRepository, RepoError, UniqueField};

/// In-process patient store.
///
/// All mutations run under one write lock, so uniqueness is checked
/// atomically with the insert/replace. Identity is a monotonically
/// increasing sequence starting at 1.
#[derive(Default)]
pub struct InMemoryPatientRepo {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Patient>,
}

impl Store {
    fn unique_check(&self, patient: &Patient) -> Result<(), RepoError> {
        for row in self.rows.values() {
            if row.id == patient.id {
                continue;
            }
            if row.email == patient.email {
                return Err(RepoError::UniqueViolation {
                    field: UniqueField::Email,
                    value: patient.email.clone(),
                });
            }
            if row.phone == patient.phone {
                return Err(RepoError::UniqueViolation {
                    field: UniqueField::Phone,
                    value: patient.phone.clone(),
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepo {
    async fn create(&self, new: NewPatient) -> Result<Patient, RepoError> {
        let mut store = self.inner.write();
        let patient = new.with_id(store.next_id + 1);
        store.unique_check(&patient)?;
        store.next_id += 1;
        store.rows.insert(patient.id, patient.clone());
        Ok(patient)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, RepoError> {
        Ok(self.inner.read().rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Patient>, RepoError> {
        Ok(self
            .inner
            .read()
            .rows
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Patient>, RepoError> {
        Ok(self
            .inner
            .read()
            .rows
            .values()
            .find(|p| p.phone == phone)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Patient>, RepoError> {
        Ok(self.inner.read().rows.values().cloned().collect())
    }

    async fn update(&self, patient: Patient) -> Result<Patient, RepoError> {
        let mut store = self.inner.write();
        if !store.rows.contains_key(&patient.id) {
            return Err(RepoError::Missing { id: patient.id });
        }
        store.unique_check(&patient)?;
        store.rows.insert(patient.id, patient.clone());
        Ok(patient)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.inner.write().rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_patient(email: &str, phone: &str) -> NewPatient {
        NewPatient {
            first_name: "Amina".to_owned(),
            last_name: "Diop".to_owned(),
            birth_date: NaiveDate::from_ymd_opt(1990, 8, 22).expect("valid date"),
            sex: "F".to_owned(),
            address: "456 Avenue Liberte, Thies".to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let repo = InMemoryPatientRepo::default();
        let a = repo
            .create(new_patient("a@x.sn", "1"))
            .await
            .expect("create");
        let b = repo
            .create(new_patient("b@x.sn", "2"))
            .await
            .expect("create");
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn create_enforces_uniqueness_atomically() {
        let repo = InMemoryPatientRepo::default();
        repo.create(new_patient("a@x.sn", "1")).await.expect("create");

        let err = repo
            .create(new_patient("a@x.sn", "2"))
            .await
            .expect_err("email taken");
        assert!(matches!(
            err,
            RepoError::UniqueViolation {
                field: UniqueField::Email,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let repo = InMemoryPatientRepo::default();
        let a = repo
            .create(new_patient("a@x.sn", "1"))
            .await
            .expect("create");
        repo.delete(a.id).await.expect("delete");

        let b = repo
            .create(new_patient("b@x.sn", "2"))
            .await
            .expect("create");
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let repo = InMemoryPatientRepo::default();
        repo.create(new_patient("a@x.sn", "1")).await.expect("create");
        repo.create(new_patient("b@x.sn", "2")).await.expect("create");

        let all = repo.list().await.expect("list");
        let emails: Vec<_> = all.iter().map(|p| p.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.sn", "b@x.sn"]);
    }
}
