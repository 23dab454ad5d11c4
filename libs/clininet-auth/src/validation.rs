use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::claims::Claims;
use crate::errors::AuthError;

/// Trusted-issuer settings, loaded from configuration.
///
/// Exactly one of `hs256_secret` (shared-secret deployments, tests) or
/// `rsa_public_key_pem` (asymmetric identity providers) must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub issuer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(default = "default_leeway_seconds")]
    pub leeway_seconds: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hs256_secret: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsa_public_key_pem: Option<String>,
}

fn default_leeway_seconds() -> u64 {
    60
}

/// Validates bearer tokens against the trusted issuer.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Build a validator from configuration.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidConfig` if no key material is configured or
    /// the RSA PEM cannot be parsed.
    pub fn from_config(cfg: &JwtConfig) -> Result<Self, AuthError> {
        let (decoding_key, algorithm) = match (&cfg.hs256_secret, &cfg.rsa_public_key_pem) {
            (Some(secret), _) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
            (None, Some(pem)) => (
                DecodingKey::from_rsa_pem(pem.as_bytes())
                    .map_err(|e| AuthError::InvalidConfig(format!("bad RSA PEM: {e}")))?,
                Algorithm::RS256,
            ),
            (None, None) => {
                return Err(AuthError::InvalidConfig(
                    "either hs256_secret or rsa_public_key_pem is required".to_owned(),
                ));
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&cfg.issuer]);
        validation.leeway = cfg.leeway_seconds;
        match &cfg.audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Validate a raw token (without the `Bearer ` prefix) and return its
    /// claims.
    ///
    /// # Errors
    /// Returns `AuthError::TokenExpired` for expired tokens and
    /// `AuthError::InvalidToken` for every other validation failure.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}
