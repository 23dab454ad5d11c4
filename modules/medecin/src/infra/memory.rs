use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::domain::model::{Medecin, NewMedecin};
use crate::domain::repo::{MedecinRepository, RepoError, UniqueField};

/// In-process medecin store; uniqueness enforced under the write lock.
#[derive(Default)]
pub struct InMemoryMedecinRepo {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Medecin>,
}

impl Store {
    fn unique_check(&self, medecin: &Medecin) -> Result<(), RepoError> {
        for row in self.rows.values() {
            if row.id == medecin.id {
                continue;
            }
            if row.email == medecin.email {
                return Err(RepoError::UniqueViolation {
                    field: UniqueField::Email,
                    value: medecin.email.clone(),
                });
            }
            if row.phone == medecin.phone {
                return Err(RepoError::UniqueViolation {
                    field: UniqueField::Phone,
                    value: medecin.phone.clone(),
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl MedecinRepository for InMemoryMedecinRepo {
    async fn create(&self, new: NewMedecin) -> Result<Medecin, RepoError> {
        let mut store = self.inner.write();
        let medecin = new.with_id(store.next_id + 1);
        store.unique_check(&medecin)?;
        store.next_id += 1;
        store.rows.insert(medecin.id, medecin.clone());
        Ok(medecin)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Medecin>, RepoError> {
        Ok(self.inner.read().rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Medecin>, RepoError> {
        Ok(self
            .inner
            .read()
            .rows
            .values()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Medecin>, RepoError> {
        Ok(self
            .inner
            .read()
            .rows
            .values()
            .find(|m| m.phone == phone)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Medecin>, RepoError> {
        Ok(self.inner.read().rows.values().cloned().collect())
    }

    async fn update(&self, medecin: Medecin) -> Result<Medecin, RepoError> {
        let mut store = self.inner.write();
        if !store.rows.contains_key(&medecin.id) {
            return Err(RepoError::Missing { id: medecin.id });
        }
        store.unique_check(&medecin)?;
        store.rows.insert(medecin.id, medecin.clone());
        Ok(medecin)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.inner.write().rows.remove(&id).is_some())
    }
}
