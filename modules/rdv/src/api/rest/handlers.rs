use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;
use validator::Validate;

use clininet_errors::Problem;

use crate::api::rest::dto::{CreateRdvReq, RdvDto, UpdateRdvReq};
use crate::api::rest::error::{domain_error_to_problem, validation_problem};
use crate::api::rest::routes::RdvState;

#[utoipa::path(
    post,
    path = "/api/v1/rdvs/new",
    request_body = CreateRdvReq,
    responses(
        (status = 201, body = RdvDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem),
        (status = 502, body = Problem),
    )
)]
#[tracing::instrument(
    name = "rdv.create",
    skip(state, req),
    fields(patient_id = req.patient_id, medecin_id = req.medecin_id)
)]
pub async fn new_rdv(
    State(state): State<RdvState>,
    Json(req): Json<CreateRdvReq>,
) -> Result<impl IntoResponse, Problem> {
    const INSTANCE: &str = "/api/v1/rdvs/new";
    req.validate()
        .map_err(|e| validation_problem(&e, &state.catalog, INSTANCE))?;

    let rdv = state
        .service
        .create(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, INSTANCE))?;

    info!(id = rdv.id, "rdv created");
    Ok((StatusCode::CREATED, Json(RdvDto::from(rdv))))
}

#[utoipa::path(
    get,
    path = "/api/v1/rdvs/{id}",
    params(("id" = i64, Path)),
    responses((status = 200, body = RdvDto), (status = 404, body = Problem))
)]
#[tracing::instrument(name = "rdv.get", skip(state))]
pub async fn get_rdv_by_id(
    State(state): State<RdvState>,
    Path(id): Path<i64>,
) -> Result<Json<RdvDto>, Problem> {
    let rdv = state
        .service
        .get(id)
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, &format!("/api/v1/rdvs/{id}")))?;
    Ok(Json(RdvDto::from(rdv)))
}

#[utoipa::path(
    get,
    path = "/api/v1/rdvs/all",
    responses((status = 200, body = [RdvDto]))
)]
#[tracing::instrument(name = "rdv.list", skip(state))]
pub async fn get_all_rdvs(State(state): State<RdvState>) -> Result<Json<Vec<RdvDto>>, Problem> {
    let rdvs = state
        .service
        .list()
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, "/api/v1/rdvs/all"))?;
    Ok(Json(rdvs.into_iter().map(RdvDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/v1/rdvs/update",
    request_body = UpdateRdvReq,
    responses(
        (status = 200, body = RdvDto),
        (status = 404, body = Problem),
        (status = 502, body = Problem),
    )
)]
#[tracing::instrument(name = "rdv.update", skip(state, req), fields(id = req.id))]
pub async fn update_rdv(
    State(state): State<RdvState>,
    Json(req): Json<UpdateRdvReq>,
) -> Result<Json<RdvDto>, Problem> {
    const INSTANCE: &str = "/api/v1/rdvs/update";
    req.validate()
        .map_err(|e| validation_problem(&e, &state.catalog, INSTANCE))?;

    let rdv = state
        .service
        .update(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, INSTANCE))?;
    Ok(Json(RdvDto::from(rdv)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rdvs/delete/{id}",
    params(("id" = i64, Path)),
    responses((status = 204), (status = 404, body = Problem))
)]
#[tracing::instrument(name = "rdv.delete", skip(state))]
pub async fn delete_rdv_by_id(
    State(state): State<RdvState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete(id).await.map_err(|e| {
        domain_error_to_problem(&e, &state.catalog, &format!("/api/v1/rdvs/delete/{id}"))
    })?;
    Ok(StatusCode::NO_CONTENT)
}
