//! Service registry seam.
//!
//! The platform's real registry (Consul, Eureka, DNS, ...) is an external
//! collaborator. CliniNet consumes it through the [`ServiceRegistry`] trait;
//! [`StaticRegistry`] is the configuration-backed implementation used by the
//! gateway and the inter-service lookup clients.

use std::collections::HashMap;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown service '{0}'")]
    UnknownService(String),
}

/// Resolve a logical service name to a live base URL.
pub trait ServiceRegistry: Send + Sync {
    /// # Errors
    /// Returns `RegistryError::UnknownService` when the name is not registered.
    fn resolve(&self, service: &str) -> Result<Url, RegistryError>;
}

/// Registry backed by a static table from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: HashMap<String, Url>,
}

impl StaticRegistry {
    #[must_use]
    pub fn new(entries: HashMap<String, Url>) -> Self {
        Self { entries }
    }

    /// Registered service names, mostly for diagnostics.
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ServiceRegistry for StaticRegistry {
    fn resolve(&self, service: &str) -> Result<Url, RegistryError> {
        self.entries
            .get(service)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownService(service.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StaticRegistry {
        let mut entries = HashMap::new();
        entries.insert(
            "patient".to_owned(),
            Url::parse("http://127.0.0.1:8081").expect("valid url"),
        );
        StaticRegistry::new(entries)
    }

    #[test]
    fn resolves_known_service() {
        let url = registry().resolve("patient").expect("registered");
        assert_eq!(url.as_str(), "http://127.0.0.1:8081/");
    }

    #[test]
    fn unknown_service_is_an_error() {
        let err = registry().resolve("billing").expect_err("not registered");
        assert!(matches!(err, RegistryError::UnknownService(name) if name == "billing"));
    }
}
