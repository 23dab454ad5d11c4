use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;
use validator::Validate;

use clininet_errors::Problem;

use crate::api::rest::dto::{CreateMedecinReq, MedecinDto, UpdateMedecinReq};
use crate::api::rest::error::{domain_error_to_problem, validation_problem};
use crate::api::rest::routes::MedecinState;

#[utoipa::path(
    post,
    path = "/api/v1/medecins/new",
    request_body = CreateMedecinReq,
    responses(
        (status = 201, body = MedecinDto),
        (status = 400, body = Problem),
        (status = 409, body = Problem),
    )
)]
#[tracing::instrument(name = "medecin.create", skip(state, req), fields(email = %req.email))]
pub async fn new_medecin(
    State(state): State<MedecinState>,
    Json(req): Json<CreateMedecinReq>,
) -> Result<impl IntoResponse, Problem> {
    const INSTANCE: &str = "/api/v1/medecins/new";
    req.validate()
        .map_err(|e| validation_problem(&e, &state.catalog, INSTANCE))?;

    let medecin = state
        .service
        .create(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, INSTANCE))?;

    info!(id = medecin.id, "medecin created");
    Ok((StatusCode::CREATED, Json(MedecinDto::from(medecin))))
}

#[utoipa::path(
    get,
    path = "/api/v1/medecins/{id}",
    params(("id" = i64, Path)),
    responses((status = 200, body = MedecinDto), (status = 404, body = Problem))
)]
#[tracing::instrument(name = "medecin.get", skip(state))]
pub async fn get_medecin_by_id(
    State(state): State<MedecinState>,
    Path(id): Path<i64>,
) -> Result<Json<MedecinDto>, Problem> {
    let medecin = state.service.get(id).await.map_err(|e| {
        domain_error_to_problem(&e, &state.catalog, &format!("/api/v1/medecins/{id}"))
    })?;
    Ok(Json(MedecinDto::from(medecin)))
}

#[utoipa::path(
    get,
    path = "/api/v1/medecins/all",
    responses((status = 200, body = [MedecinDto]))
)]
#[tracing::instrument(name = "medecin.list", skip(state))]
pub async fn get_all_medecins(
    State(state): State<MedecinState>,
) -> Result<Json<Vec<MedecinDto>>, Problem> {
    let medecins = state
        .service
        .list()
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, "/api/v1/medecins/all"))?;
    Ok(Json(medecins.into_iter().map(MedecinDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/v1/medecins/update",
    request_body = UpdateMedecinReq,
    responses(
        (status = 200, body = MedecinDto),
        (status = 404, body = Problem),
        (status = 409, body = Problem),
    )
)]
#[tracing::instrument(name = "medecin.update", skip(state, req), fields(id = req.id))]
pub async fn update_medecin(
    State(state): State<MedecinState>,
    Json(req): Json<UpdateMedecinReq>,
) -> Result<Json<MedecinDto>, Problem> {
    const INSTANCE: &str = "/api/v1/medecins/update";
    req.validate()
        .map_err(|e| validation_problem(&e, &state.catalog, INSTANCE))?;

    let medecin = state
        .service
        .update(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, INSTANCE))?;
    Ok(Json(MedecinDto::from(medecin)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/medecins/delete/{id}",
    params(("id" = i64, Path)),
    responses((status = 204), (status = 404, body = Problem))
)]
#[tracing::instrument(name = "medecin.delete", skip(state))]
pub async fn delete_medecin_by_id(
    State(state): State<MedecinState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete(id).await.map_err(|e| {
        domain_error_to_problem(&e, &state.catalog, &format!("/api/v1/medecins/delete/{id}"))
    })?;
    Ok(StatusCode::NO_CONTENT)
}
