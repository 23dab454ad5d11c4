use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use clininet_errors::MessageCatalog;

use crate::api::rest::dto::{CreatePatientReq, PatientDto, UpdatePatientReq};
use crate::api::rest::handlers;
use crate::domain::service::PatientService;

/// Shared state of the patient REST surface.
#[derive(Clone)]
pub struct PatientState {
    pub service: Arc<PatientService>,
    pub catalog: MessageCatalog,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "CliniNet Patient Service", version = "0.1.0"),
    paths(
        handlers::new_patient,
        handlers::get_patient_by_id,
        handlers::get_all_patients,
        handlers::update_patient,
        handlers::delete_patient_by_id,
    ),
    components(schemas(PatientDto, CreatePatientReq, UpdatePatientReq))
)]
struct ApiDoc;

/// Build the service router.
pub fn router(state: PatientState) -> Router {
    Router::new()
        .route("/api/v1/patients/new", post(handlers::new_patient))
        .route("/api/v1/patients/all", get(handlers::get_all_patients))
        .route("/api/v1/patients/{id}", get(handlers::get_patient_by_id))
        .route("/api/v1/patients/update", put(handlers::update_patient))
        .route(
            "/api/v1/patients/delete/{id}",
            delete(handlers::delete_patient_by_id),
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
