use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;
use validator::Validate;

use clininet_errors::Problem;

use crate::api::rest::dto::{CreatePatientReq, PatientDto, UpdatePatientReq};
use crate::api::rest::error::{domain_error_to_problem, validation_problem};
use crate::api::rest::routes::PatientState;

#[utoipa::path(
    post,
    path = "/api/v1/patients/new",
    request_body = CreatePatientReq,
    responses(
        (status = 201, body = PatientDto),
        (status = 400, body = Problem),
        (status = 409, body = Problem),
    )
)]
#[tracing::instrument(name = "patient.create", skip(state, req), fields(email = %req.email))]
pub async fn new_patient(
    State(state): State<PatientState>,
    Json(req): Json<CreatePatientReq>,
) -> Result<impl IntoResponse, Problem> {
    const INSTANCE: &str = "/api/v1/patients/new";
    req.validate()
        .map_err(|e| validation_problem(&e, &state.catalog, INSTANCE))?;

    let patient = state
        .service
        .create(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, INSTANCE))?;

    info!(id = patient.id, "patient created");
    Ok((StatusCode::CREATED, Json(PatientDto::from(patient))))
}

#[utoipa::path(
    get,
    path = "/api/v1/patients/{id}",
    params(("id" = i64, Path)),
    responses((status = 200, body = PatientDto), (status = 404, body = Problem))
)]
#[tracing::instrument(name = "patient.get", skip(state))]
pub async fn get_patient_by_id(
    State(state): State<PatientState>,
    Path(id): Path<i64>,
) -> Result<Json<PatientDto>, Problem> {
    let patient = state.service.get(id).await.map_err(|e| {
        domain_error_to_problem(&e, &state.catalog, &format!("/api/v1/patients/{id}"))
    })?;
    Ok(Json(PatientDto::from(patient)))
}

#[utoipa::path(
    get,
    path = "/api/v1/patients/all",
    responses((status = 200, body = [PatientDto]))
)]
#[tracing::instrument(name = "patient.list", skip(state))]
pub async fn get_all_patients(
    State(state): State<PatientState>,
) -> Result<Json<Vec<PatientDto>>, Problem> {
    let patients = state
        .service
        .list()
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, "/api/v1/patients/all"))?;
    Ok(Json(patients.into_iter().map(PatientDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/v1/patients/update",
    request_body = UpdatePatientReq,
    responses(
        (status = 200, body = PatientDto),
        (status = 404, body = Problem),
        (status = 409, body = Problem),
    )
)]
#[tracing::instrument(name = "patient.update", skip(state, req), fields(id = req.id))]
pub async fn update_patient(
    State(state): State<PatientState>,
    Json(req): Json<UpdatePatientReq>,
) -> Result<Json<PatientDto>, Problem> {
    const INSTANCE: &str = "/api/v1/patients/update";
    req.validate()
        .map_err(|e| validation_problem(&e, &state.catalog, INSTANCE))?;

    let patient = state
        .service
        .update(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, &state.catalog, INSTANCE))?;
    Ok(Json(PatientDto::from(patient)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/patients/delete/{id}",
    params(("id" = i64, Path)),
    responses((status = 204), (status = 404, body = Problem))
)]
#[tracing::instrument(name = "patient.delete", skip(state))]
pub async fn delete_patient_by_id(
    State(state): State<PatientState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete(id).await.map_err(|e| {
        domain_error_to_problem(&e, &state.catalog, &format!("/api/v1/patients/delete/{id}"))
    })?;
    Ok(StatusCode::NO_CONTENT)
}
