use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use clininet_errors::MessageCatalog;

use crate::api::rest::dto::{CreateDossierReq, DossierDto, UpdateDossierReq};
use crate::api::rest::handlers;
use crate::domain::service::DossierService;

/// Shared state of the dossier REST surface.
#[derive(Clone)]
pub struct DossierState {
    pub service: Arc<DossierService>,
    pub catalog: MessageCatalog,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "CliniNet Dossier Service", version = "0.1.0"),
    paths(
        handlers::new_dossier,
        handlers::get_dossier_by_id,
        handlers::get_all_dossiers,
        handlers::update_dossier,
        handlers::delete_dossier_by_id,
    ),
    components(schemas(DossierDto, CreateDossierReq, UpdateDossierReq))
)]
struct ApiDoc;

/// Build the service router.
pub fn router(state: DossierState) -> Router {
    Router::new()
        .route("/api/v1/dossiers/new", post(handlers::new_dossier))
        .route("/api/v1/dossiers/all", get(handlers::get_all_dossiers))
        .route("/api/v1/dossiers/{id}", get(handlers::get_dossier_by_id))
        .route("/api/v1/dossiers/update", put(handlers::update_dossier))
        .route(
            "/api/v1/dossiers/delete/{id}",
            delete(handlers::delete_dossier_by_id),
        )
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "up" }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
