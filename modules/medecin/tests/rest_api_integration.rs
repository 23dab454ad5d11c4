#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the medecin REST surface.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clininet_errors::MessageCatalog;
use clininet_medecin::domain::service::MedecinService;
use clininet_medecin::infra::memory::InMemoryMedecinRepo;
use clininet_medecin::{router, MedecinState};

fn app() -> Router {
    router(MedecinState {
        service: Arc::new(MedecinService::new(Arc::new(InMemoryMedecinRepo::default()))),
        catalog: MessageCatalog::default(),
    })
}

fn medecin_body(email: &str, phone: &str) -> serde_json::Value {
    serde_json::json!({
        "first_name": "Fatima",
        "last_name": "Sow",
        "specialty": "Cardiologie",
        "phone": phone,
        "email": email,
        "office_address": "Hopital Principal, Dakar"
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
async fn create_get_update_delete_lifecycle() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/medecins/new",
        Some(medecin_body("fatima.sow@hopital.sn", "781234567")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, fetched) = send(&app, Method::GET, "/api/v1/medecins/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut update = medecin_body("fatima.sow@hopital.sn", "781234567");
    update["id"] = serde_json::json!(1);
    update["specialty"] = serde_json::json!("Pediatrie");
    let (status, updated) = send(&app, Method::PUT, "/api/v1/medecins/update", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["specialty"], "Pediatrie");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/medecins/delete/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, problem) = send(&app, Method::GET, "/api/v1/medecins/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["code"], "medecin.notfound");
}

#[tokio::test]
async fn duplicate_phone_is_409_with_phone_code() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/v1/medecins/new",
        Some(medecin_body("a@hopital.sn", "781111111")),
    )
    .await;

    let (status, problem) = send(
        &app,
        Method::POST,
        "/api/v1/medecins/new",
        Some(medecin_body("b@hopital.sn", "781111111")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(problem["code"], "telephone.exists");
}

#[tokio::test]
async fn invalid_body_is_400_before_any_store_effect() {
    let app = app();
    let mut body = medecin_body("bad-email", "781234567");
    body["specialty"] = serde_json::json!("");

    let (status, problem) = send(&app, Method::POST, "/api/v1/medecins/new", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["code"], "request.invalid");

    let (_, all) = send(&app, Method::GET, "/api/v1/medecins/all", None).await;
    assert_eq!(all, serde_json::json!([]));
}

#[tokio::test]
async fn health_is_public_and_up() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
}
