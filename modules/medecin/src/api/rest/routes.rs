use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use clininet_errors::MessageCatalog;

use crate::api::rest::dto::{CreateMedecinReq, MedecinDto, UpdateMedecinReq};
use crate::api::rest::handlers;
use crate::domain::service::MedecinService;

/// Shared state of the medecin REST surface.
#[derive(Clone)]
pub struct MedecinState {
    pub service: Arc<MedecinService>,
    pub catalog: MessageCatalog,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "CliniNet Medecin Service", version = "0.1.0"),
    paths(
        handlers::new_medecin,
        handlers::get_medecin_by_id,
        handlers::get_all_medecins,
        handlers::update_medecin,
        handlers::delete_medecin_by_id,
    ),
    components(schemas(MedecinDto, CreateMedecinReq, UpdateMedecinReq))
)]
struct ApiDoc;

/// Build the service router.
pub fn router(state: MedecinState) -> Router {
    Router::new()
        .route("/api/v1/medecins/new", post(handlers::new_medecin))
        .route("/api/v1/medecins/all", get(handlers::get_all_medecins))
        .route("/api/v1/medecins/{id}", get(handlers::get_medecin_by_id))
        .route("/api/v1/medecins/update", put(handlers::update_medecin))
        .route(
            "/api/v1/medecins/delete/{id}",
            delete(handlers::delete_medecin_by_id),
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
