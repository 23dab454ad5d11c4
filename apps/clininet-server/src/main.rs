mod config;
mod seed;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use futures::future::FutureExt;
use tracing::info;

use clininet_auth::TokenValidator;
use clininet_dossier::domain::service::DossierService;
use clininet_dossier::infra::memory::InMemoryDossierRepo;
use clininet_dossier::DossierState;
use clininet_errors::MessageCatalog;
use clininet_gateway::GatewayState;
use clininet_http::HttpClient;
use clininet_lookup::HttpExistenceLookup;
use clininet_medecin::domain::service::MedecinService;
use clininet_medecin::infra::memory::InMemoryMedecinRepo;
use clininet_medecin::MedecinState;
use clininet_patient::domain::service::PatientService;
use clininet_patient::infra::memory::InMemoryPatientRepo;
use clininet_patient::PatientState;
use clininet_rdv::domain::service::RdvService;
use clininet_rdv::infra::memory::InMemoryRdvRepo;
use clininet_rdv::RdvState;
use clininet_registry::StaticRegistry;

use crate::config::AppConfig;

/// CliniNet Server - clinic network services behind one gateway
#[derive(Parser)]
#[command(name = "clininet-server")]
#[command(about = "CliniNet Server - clinic network services behind one gateway")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Roles to run; defaults to all of them
    #[arg(short, long, value_enum)]
    role: Vec<Role>,

    /// Load demo data into the patient and medecin stores
    #[arg(long)]
    seed: bool,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Start the selected roles
    Run,
    /// Validate configuration and exit
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Role {
    Patient,
    Medecin,
    Dossier,
    Rdv,
    Gateway,
}

const ALL_ROLES: [Role; 5] = [
    Role::Patient,
    Role::Medecin,
    Role::Dossier,
    Role::Rdv,
    Role::Gateway,
];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);

    if cli.print_config {
        println!(
            "Effective configuration:\n{}",
            serde_json::to_string_pretty(&config)?
        );
        return Ok(());
    }

    match cli.command.clone().unwrap_or(Commands::Run) {
        Commands::Run => run_server(config, &cli).await,
        Commands::Check => check_config(&config),
    }
}

fn init_logging(config: &AppConfig, verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn check_config(config: &AppConfig) -> Result<()> {
    if let Some(auth) = &config.auth {
        TokenValidator::from_config(auth)
            .map_err(|e| anyhow::anyhow!("auth configuration invalid: {e}"))?;
    }
    for role in ALL_ROLES {
        bind_addr(config, role)
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("invalid bind address for {role:?}"))?;
    }
    println!("Configuration is valid");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn bind_addr(config: &AppConfig, role: Role) -> &str {
    match role {
        Role::Patient => &config.services.patient.bind_addr,
        Role::Medecin => &config.services.medecin.bind_addr,
        Role::Dossier => &config.services.dossier.bind_addr,
        Role::Rdv => &config.services.rdv.bind_addr,
        Role::Gateway => &config.services.gateway.bind_addr,
    }
}

async fn run_server(config: AppConfig, cli: &Cli) -> Result<()> {
    let roles: Vec<Role> = if cli.role.is_empty() {
        ALL_ROLES.to_vec()
    } else {
        cli.role.clone()
    };

    let catalog = MessageCatalog::new(config.locale);
    let registry = Arc::new(StaticRegistry::new(config.registry.clone()));
    let client = HttpClient::with_timeout(Duration::from_secs(config.lookup_timeout_secs));

    let shutdown = shutdown_signal().shared();
    let mut servers = Vec::new();

    for role in roles {
        let addr = bind_addr(&config, role).to_owned();
        let router = match role {
            Role::Patient => {
                let service = Arc::new(PatientService::new(Arc::new(
                    InMemoryPatientRepo::default(),
                )));
                if cli.seed {
                    seed::seed_patients(&service).await;
                }
                clininet_patient::router(PatientState { service, catalog })
            }
            Role::Medecin => {
                let service = Arc::new(MedecinService::new(Arc::new(
                    InMemoryMedecinRepo::default(),
                )));
                if cli.seed {
                    seed::seed_medecins(&service).await;
                }
                clininet_medecin::router(MedecinState { service, catalog })
            }
            Role::Dossier => {
                let patients = Arc::new(HttpExistenceLookup::new(
                    client.clone(),
                    registry.clone(),
                    "patient",
                    "patients",
                ));
                let service = Arc::new(DossierService::new(
                    Arc::new(InMemoryDossierRepo::default()),
                    patients,
                ));
                clininet_dossier::router(DossierState { service, catalog })
            }
            Role::Rdv => {
                let patients = Arc::new(HttpExistenceLookup::new(
                    client.clone(),
                    registry.clone(),
                    "patient",
                    "patients",
                ));
                let medecins = Arc::new(HttpExistenceLookup::new(
                    client.clone(),
                    registry.clone(),
                    "medecin",
                    "medecins",
                ));
                let service = Arc::new(RdvService::new(
                    Arc::new(InMemoryRdvRepo::default()),
                    patients,
                    medecins,
                ));
                clininet_rdv::router(RdvState { service, catalog })
            }
            Role::Gateway => {
                let auth = config
                    .auth
                    .as_ref()
                    .context("auth section is required to run the gateway")?;
                let validator = Arc::new(
                    TokenValidator::from_config(auth)
                        .map_err(|e| anyhow::anyhow!("auth configuration invalid: {e}"))?,
                );
                clininet_gateway::router(GatewayState {
                    validator,
                    policy: Arc::new(config.policy.clone()),
                    registry: registry.clone(),
                    client: client.clone(),
                })
            }
        };

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("cannot bind {addr} for {role:?}"))?;
        info!(?role, %addr, "listening");

        let shutdown = shutdown.clone();
        servers.push(tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown)
                .await
        }));
    }

    for server in servers {
        server.await??;
    }
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}
