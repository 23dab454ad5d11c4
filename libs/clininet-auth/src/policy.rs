use serde::{Deserialize, Serialize};

use crate::claims::Claims;
use crate::errors::AuthError;

/// One entry of the role policy: a path prefix and the roles allowed
/// through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRule {
    pub prefix: String,
    pub roles: Vec<String>,
}

/// Ordered role-to-path policy, evaluated top-to-bottom with first match
/// wins. Paths matching no rule require only a valid credential; paths
/// under a public prefix require none at all.
///
/// The shipped defaults reproduce the upstream resource-server policy
/// verbatim, including granting `/medecin` to ADMIN only (a MEDECIN
/// credential is rejected on its own service's paths). Operators can
/// override the table from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyTable {
    rules: Vec<PolicyRule>,
    public_prefixes: Vec<String>,
}

impl PolicyTable {
    #[must_use]
    pub fn new(rules: Vec<PolicyRule>, public_prefixes: Vec<String>) -> Self {
        Self {
            rules,
            public_prefixes,
        }
    }

    /// The default clinic policy and public allow-list.
    #[must_use]
    pub fn clinic_defaults() -> Self {
        Self {
            rules: vec![
                PolicyRule {
                    prefix: "/admin".to_owned(),
                    roles: vec!["ADMIN".to_owned()],
                },
                PolicyRule {
                    prefix: "/medecin".to_owned(),
                    roles: vec!["ADMIN".to_owned()],
                },
                PolicyRule {
                    prefix: "/patient".to_owned(),
                    roles: vec!["ADMIN".to_owned(), "MEDECIN".to_owned()],
                },
            ],
            public_prefixes: vec![
                "/health".to_owned(),
                "/api-docs".to_owned(),
                "/docs".to_owned(),
                "/registry".to_owned(),
            ],
        }
    }

    /// Whether the path bypasses authentication entirely.
    #[must_use]
    pub fn is_public(&self, path: &str) -> bool {
        self.public_prefixes
            .iter()
            .any(|p| prefix_matches(p, path))
    }

    /// Roles allowed for this path, or `None` when any authenticated
    /// credential passes.
    #[must_use]
    pub fn required_roles(&self, path: &str) -> Option<&[String]> {
        self.rules
            .iter()
            .find(|rule| prefix_matches(&rule.prefix, path))
            .map(|rule| rule.roles.as_slice())
    }

    /// Authorize validated claims against this path.
    ///
    /// # Errors
    /// Returns `AuthError::Forbidden` when the path is role-restricted and
    /// the credential carries none of the allowed roles.
    pub fn authorize(&self, path: &str, claims: &Claims) -> Result<(), AuthError> {
        match self.required_roles(path) {
            Some(allowed) if !allowed.iter().any(|role| claims.has_role(role)) => {
                Err(AuthError::Forbidden)
            }
            _ => Ok(()),
        }
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::clinic_defaults()
    }
}

/// Prefix match on path-segment boundaries: `/patient` matches `/patient`
/// and `/patient/42` but not `/patients`.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}
