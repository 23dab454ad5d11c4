#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the dossier REST surface with stubbed patient
//! lookups.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clininet_dossier::domain::service::DossierService;
use clininet_dossier::infra::memory::InMemoryDossierRepo;
use clininet_dossier::{router, DossierState};
use clininet_errors::MessageCatalog;
use clininet_lookup::{ExistenceLookup, LookupError, LookupOutcome};

enum Stub {
    Echo,
    Absent,
    Down,
}

#[async_trait]
impl ExistenceLookup for Stub {
    async fn exists(&self, id: i64) -> Result<LookupOutcome, LookupError> {
        match self {
            Stub::Echo => Ok(LookupOutcome::Found { id }),
            Stub::Absent => Ok(LookupOutcome::Absent),
            Stub::Down => Err(LookupError::Upstream {
                service: "patient".to_owned(),
                reason: "connection refused".to_owned(),
            }),
        }
    }
}

fn app(stub: Stub) -> Router {
    router(DossierState {
        service: Arc::new(DossierService::new(
            Arc::new(InMemoryDossierRepo::default()),
            Arc::new(stub),
        )),
        catalog: MessageCatalog::default(),
    })
}

fn dossier_body(patient_id: i64) -> serde_json::Value {
    serde_json::json!({
        "consultation_date": "2024-03-12",
        "report": "Consultation de routine",
        "patient_id": patient_id
    })
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn create_with_existing_patient_round_trips() {
    let app = app(Stub::Echo);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/dossiers/new",
        Some(dossier_body(7)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["patient_id"], 7);

    let (status, fetched) = send(&app, Method::GET, "/api/v1/dossiers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_patient_is_404_naming_the_reference() {
    let app = app(Stub::Absent);

    let (status, problem) = send(
        &app,
        Method::POST,
        "/api/v1/dossiers/new",
        Some(dossier_body(33)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["code"], "patient.notfound");
    assert!(problem["detail"].as_str().unwrap().contains("33"));

    // Nothing persisted.
    let (_, all) = send(&app, Method::GET, "/api/v1/dossiers/all", None).await;
    assert_eq!(all, serde_json::json!([]));
}

#[tokio::test]
async fn unreachable_patient_service_is_502_not_404() {
    let app = app(Stub::Down);

    let (status, problem) = send(
        &app,
        Method::POST,
        "/api/v1/dossiers/new",
        Some(dossier_body(7)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(problem["code"], "patient.upstream");
}

#[tokio::test]
async fn update_missing_dossier_reports_the_dossier_first() {
    // Even with the patient service down, a missing dossier wins.
    let app = app(Stub::Down);

    let mut body = dossier_body(7);
    body["id"] = serde_json::json!(42);
    let (status, problem) = send(&app, Method::PUT, "/api/v1/dossiers/update", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["code"], "dossier.notfound");
}

#[tokio::test]
async fn zero_patient_id_is_a_validation_error() {
    let app = app(Stub::Echo);

    let (status, problem) = send(
        &app,
        Method::POST,
        "/api/v1/dossiers/new",
        Some(dossier_body(0)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["code"], "request.invalid");
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = app(Stub::Echo);
    send(
        &app,
        Method::POST,
        "/api/v1/dossiers/new",
        Some(dossier_body(7)),
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, "/api/v1/dossiers/delete/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, problem) = send(&app, Method::DELETE, "/api/v1/dossiers/delete/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["code"], "dossier.notfound");
}
