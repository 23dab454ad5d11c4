use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use clininet_errors::MessageCatalog;

use crate::api::rest::dto::{CreateRdvReq, RdvDto, UpdateRdvReq};
use crate::api::rest::handlers;
use crate::domain::service::RdvService;

/// Shared state of the rdv REST surface.
#[derive(Clone)]
pub struct RdvState {
    pub service: Arc<RdvService>,
    pub catalog: MessageCatalog,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "CliniNet Rdv Service", version = "0.1.0"),
    paths(
        handlers::new_rdv,
        handlers::get_rdv_by_id,
        handlers::get_all_rdvs,
        handlers::update_rdv,
        handlers::delete_rdv_by_id,
    ),
    components(schemas(RdvDto, CreateRdvReq, UpdateRdvReq))
)]
struct ApiDoc;

/// Build the service router.
pub fn router(state: RdvState) -> Router {
    Router::new()
        .route("/api/v1/rdvs/new", post(handlers::new_rdv))
        .route("/api/v1/rdvs/all", get(handlers::get_all_rdvs))
        .route("/api/v1/rdvs/{id}", get(handlers::get_rdv_by_id))
        .route("/api/v1/rdvs/update", put(handlers::update_rdv))
        .route("/api/v1/rdvs/delete/{id}", delete(handlers::delete_rdv_by_id))
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
