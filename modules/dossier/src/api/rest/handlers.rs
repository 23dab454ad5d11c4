use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;
use validator::Validate;

use clininet_errors::Problem;

use crate::api::rest::dto::{CreateDossierReq, DossierDto, UpdateDossierReq};
use crate::api::rest::error::{domain_error_to_problem, validation_problem};
use crate::api::rest::routes::DossierState;

#[utoipa::path(
    post,
    path = "/api/v1/dossiers/new",
    request_body = CreateDossierReq,
    responses(
        (status = 201, body = DossierDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem),
        (status = 502, body = Problem),
    )
)]
#[tracing::instrument(name = "dossier.create", skip(state, req), fields(patient_id = req.patient_id))]
pub async fn new_dossier(
    State(state): State<DossierState>,
    Json(req): Json<CreateDossierReq>,
) -> Result<impl IntoResponse, Problem> {
    const INSTANCE: &str = "/api/v1/dossiers/new";
    req.validate()
        .map_err(|e| validation_problem(&e, &state.catalog, INSTANCE))?;

    let dossier = state
        .service
        .create(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, INSTANCE))?;

    info!(id = dossier.id, "dossier created");
    Ok((StatusCode::CREATED, Json(DossierDto::from(dossier))))
}

#[utoipa::path(
    get,
    path = "/api/v1/dossiers/{id}",
    params(("id" = i64, Path)),
    responses((status = 200, body = DossierDto), (status = 404, body = Problem))
)]
#[tracing::instrument(name = "dossier.get", skip(state))]
pub async fn get_dossier_by_id(
    State(state): State<DossierState>,
    Path(id): Path<i64>,
) -> Result<Json<DossierDto>, Problem> {
    let dossier = state.service.get(id).await.map_err(|e| {
        domain_error_to_problem(&e, &state.catalog, &format!("/api/v1/dossiers/{id}"))
    })?;
    Ok(Json(DossierDto::from(dossier)))
}

#[utoipa::path(
    get,
    path = "/api/v1/dossiers/all",
    responses((status = 200, body = [DossierDto]))
)]
#[tracing::instrument(name = "dossier.list", skip(state))]
pub async fn get_all_dossiers(
    State(state): State<DossierState>,
) -> Result<Json<Vec<DossierDto>>, Problem> {
    let dossiers = state
        .service
        .list()
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, "/api/v1/dossiers/all"))?;
    Ok(Json(dossiers.into_iter().map(DossierDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/v1/dossiers/update",
    request_body = UpdateDossierReq,
    responses(
        (status = 200, body = DossierDto),
        (status = 404, body = Problem),
        (status = 502, body = Problem),
    )
)]
#[tracing::instrument(name = "dossier.update", skip(state, req), fields(id = req.id))]
pub async fn update_dossier(
    State(state): State<DossierState>,
    Json(req): Json<UpdateDossierReq>,
) -> Result<Json<DossierDto>, Problem> {
    const INSTANCE: &str = "/api/v1/dossiers/update";
    req.validate()
        .map_err(|e| validation_problem(&e, &state.catalog, INSTANCE))?;

    let dossier = state
        .service
        .update(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, INSTANCE))?;
    Ok(Json(DossierDto::from(dossier)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/dossiers/delete/{id}",
    params(("id" = i64, Path)),
    responses((status = 204), (status = 404, body = Problem))
)]
#[tracing::instrument(name = "dossier.delete", skip(state))]
pub async fn delete_dossier_by_id(
    State(state): State<DossierState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete(id).await.map_err(|e| {
        domain_error_to_problem(&e, &state.catalog, &format!("/api/v1/dossiers/delete/{id}"))
    })?;
    Ok(StatusCode::NO_CONTENT)
}
