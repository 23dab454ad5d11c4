//! Remote entity existence lookup.
//!
//! Dependent aggregates (Dossier, Rdv) verify at write time that the ids
//! they reference exist in the owning service. The capability is modelled
//! explicitly: a lookup yields `Found`/`Absent`, and transport failures are
//! a separate error, never conflated with absence.

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use clininet_http::HttpClient;
use clininet_registry::ServiceRegistry;

/// Result of a successful lookup round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The remote entity exists; `id` is echoed from the remote response
    /// body, not from the caller's input.
    Found { id: i64 },
    /// The owning service answered cleanly that no such entity exists.
    Absent,
}

/// A lookup that could not produce a found/absent answer.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("upstream service '{service}' unavailable: {reason}")]
    Upstream { service: String, reason: String },
}

/// Capability injected into write validators of dependent aggregates.
#[async_trait]
pub trait ExistenceLookup: Send + Sync {
    /// Resolve whether the entity with `id` exists in the remote service.
    ///
    /// # Errors
    /// Returns `LookupError::Upstream` when the remote service cannot be
    /// reached or answers with something other than the entity or a clean
    /// not-found.
    async fn exists(&self, id: i64) -> Result<LookupOutcome, LookupError>;
}

/// Minimal projection of the remote entity; only the id is ever used.
#[derive(Debug, Deserialize)]
struct EntityRef {
    id: i64,
}

/// HTTP implementation bound to one remote service and resource collection.
///
/// Resolves the service through the registry on every call (no caching) and
/// issues a single synchronous `GET {base}/api/v1/{resource}/{id}`.
pub struct HttpExistenceLookup {
    client: HttpClient,
    registry: Arc<dyn ServiceRegistry>,
    service: String,
    resource: String,
}

impl HttpExistenceLookup {
    #[must_use]
    pub fn new(
        client: HttpClient,
        registry: Arc<dyn ServiceRegistry>,
        service: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            client,
            registry,
            service: service.into(),
            resource: resource.into(),
        }
    }

    fn upstream(&self, reason: impl Into<String>) -> LookupError {
        LookupError::Upstream {
            service: self.service.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ExistenceLookup for HttpExistenceLookup {
    #[tracing::instrument(skip(self), fields(service = %self.service))]
    async fn exists(&self, id: i64) -> Result<LookupOutcome, LookupError> {
        let mut url = self
            .registry
            .resolve(&self.service)
            .map_err(|e| self.upstream(e.to_string()))?;
        let id_str = id.to_string();
        url.path_segments_mut()
            .map_err(|()| self.upstream("base URL cannot have segments"))?
            .extend(["api", "v1", self.resource.as_str(), id_str.as_str()]);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| self.upstream(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                let entity: EntityRef = response
                    .json()
                    .map_err(|e| self.upstream(format!("undecodable body: {e}")))?;
                Ok(LookupOutcome::Found { id: entity.id })
            }
            StatusCode::NOT_FOUND => Ok(LookupOutcome::Absent),
            status => Err(self.upstream(format!("unexpected status {status}"))),
        }
    }
}
