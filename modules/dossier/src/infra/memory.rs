use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::domain::model::{Dossier, NewDossier};
use crate::domain::repo::{DossierRepository, RepoError};

/// In-process dossier store.
#[derive(Default)]
pub struct InMemoryDossierRepo {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Dossier>,
}

#[async_trait]
impl DossierRepository for InMemoryDossierRepo {
    async fn create(&self, new: NewDossier) -> Result<Dossier, RepoError> {
        let mut store = self.inner.write();
        store.next_id += 1;
        let dossier = new.with_id(store.next_id);
        store.rows.insert(dossier.id, dossier.clone());
        Ok(dossier)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Dossier>, RepoError> {
        Ok(self.inner.read().rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Dossier>, RepoError> {
        Ok(self.inner.read().rows.values().cloned().collect())
    }

    async fn update(&self, dossier: Dossier) -> Result<Dossier, RepoError> {
        let mut store = self.inner.write();
        if !store.rows.contains_key(&dossier.id) {
            return Err(RepoError::Missing { id: dossier.id });
        }
        store.rows.insert(dossier.id, dossier.clone());
        Ok(dossier)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.inner.write().rows.remove(&id).is_some())
    }
}
