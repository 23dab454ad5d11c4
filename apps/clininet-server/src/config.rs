use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use url::Url;

use clininet_auth::{JwtConfig, PolicyTable};
use clininet_errors::Locale;

/// Effective configuration of the server, merged in layers:
/// defaults, then the YAML file, then `CLININET__*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    /// Locale of client-facing error messages.
    pub locale: Locale,
    pub services: ServicesConfig,
    /// Logical service name -> base URL, used by the gateway and the
    /// inter-service lookups. Stands in for the platform registry.
    pub registry: HashMap<String, Url>,
    /// Trusted-issuer settings; required to run the gateway role.
    pub auth: Option<JwtConfig>,
    /// Gateway role policy and public allow-list.
    pub policy: PolicyTable,
    /// Bounded timeout for remote entity lookups, in seconds.
    pub lookup_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub patient: BindConfig,
    pub medecin: BindConfig,
    pub dossier: BindConfig,
    pub rdv: BindConfig,
    pub gateway: BindConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindConfig {
    pub bind_addr: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            patient: BindConfig {
                bind_addr: "127.0.0.1:8081".to_owned(),
            },
            medecin: BindConfig {
                bind_addr: "127.0.0.1:8082".to_owned(),
            },
            dossier: BindConfig {
                bind_addr: "127.0.0.1:8083".to_owned(),
            },
            rdv: BindConfig {
                bind_addr: "127.0.0.1:8084".to_owned(),
            },
            gateway: BindConfig {
                bind_addr: "127.0.0.1:8080".to_owned(),
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut registry = HashMap::new();
        for (name, port) in [
            ("patient", 8081u16),
            ("medecin", 8082),
            ("dossier", 8083),
            ("rdv", 8084),
        ] {
            if let Ok(url) = Url::parse(&format!("http://127.0.0.1:{port}")) {
                registry.insert(name.to_owned(), url);
            }
        }
        Self {
            logging: LoggingConfig::default(),
            locale: Locale::default(),
            services: ServicesConfig::default(),
            registry,
            auth: None,
            policy: PolicyTable::clinic_defaults(),
            lookup_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults <- YAML file (if given) <- env vars.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed("CLININET__").split("__"));

        figment.extract().context("invalid configuration")
    }
}
