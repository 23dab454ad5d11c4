use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::domain::model::{NewRdv, Rdv};
use crate::domain::repo::{RdvRepository, RepoError};

/// In-process rdv store.
#[derive(Default)]
pub struct InMemoryRdvRepo {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Rdv>,
}

#[async_trait]
impl RdvRepository for InMemoryRdvRepo {
    async fn create(&self, new: NewRdv) -> Result<Rdv, RepoError> {
        let mut store = self.inner.write();
        store.next_id += 1;
        let rdv = new.with_id(store.next_id);
        store.rows.insert(rdv.id, rdv.clone());
        Ok(rdv)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Rdv>, RepoError> {
        Ok(self.inner.read().rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Rdv>, RepoError> {
        Ok(self.inner.read().rows.values().cloned().collect())
    }

    async fn update(&self, rdv: Rdv) -> Result<Rdv, RepoError> {
        let mut store = self.inner.write();
        if !store.rows.contains_key(&rdv.id) {
            return Err(RepoError::Missing { id: rdv.id });
        }
        store.rows.insert(rdv.id, rdv.clone());
        Ok(rdv)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.inner.write().rows.remove(&id).is_some())
    }
}
