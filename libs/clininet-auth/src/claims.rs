use serde::{Deserialize, Serialize};

/// Nested role container, as issued by the identity provider under the
/// `realm_access` claim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// JWT claims the gateway cares about.
///
/// Signature, expiry, and issuer are checked by
/// [`crate::validation::TokenValidator`]; everything else the provider puts
/// in the token is preserved in `extras`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the `sub` claim.
    pub sub: String,

    /// Issuer - the `iss` claim.
    pub iss: String,

    /// Expiration time - the `exp` claim, seconds since epoch.
    pub exp: i64,

    /// Role names, nested under `realm_access.roles`.
    #[serde(default)]
    pub realm_access: RealmAccess,

    /// Additional provider-specific claims.
    #[serde(flatten)]
    pub extras: serde_json::Map<String, serde_json::Value>,
}

impl Claims {
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.realm_access.roles
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.realm_access.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_deserialize_from_nested_claim() {
        let json = serde_json::json!({
            "sub": "user-7",
            "iss": "https://idp.clinic.local/realms/clinic",
            "exp": 4_102_444_800i64,
            "realm_access": { "roles": ["ADMIN", "MEDECIN"] },
            "preferred_username": "dr.sow"
        });

        let claims: Claims = serde_json::from_value(json).expect("deserialize");
        assert!(claims.has_role("ADMIN"));
        assert!(claims.has_role("MEDECIN"));
        assert!(!claims.has_role("PATIENT"));
        assert_eq!(claims.extras["preferred_username"], "dr.sow");
    }

    #[test]
    fn missing_realm_access_means_no_roles() {
        let json = serde_json::json!({
            "sub": "user-8",
            "iss": "https://idp.clinic.local/realms/clinic",
            "exp": 4_102_444_800i64
        });

        let claims: Claims = serde_json::from_value(json).expect("deserialize");
        assert!(claims.roles().is_empty());
    }
}
