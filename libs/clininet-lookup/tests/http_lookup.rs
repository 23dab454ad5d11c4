#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Exercises `HttpExistenceLookup` against a loopback stub of an owning
//! service, covering the found / absent / transport-failure split.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use clininet_http::HttpClient;
use clininet_lookup::{ExistenceLookup, HttpExistenceLookup, LookupError, LookupOutcome};
use clininet_registry::StaticRegistry;
use url::Url;

async fn spawn_patient_stub() -> SocketAddr {
    // Patient 1 exists, patient 2 is missing, patient 3 explodes.
    let app = Router::new().route(
        "/api/v1/patients/{id}",
        get(|Path(id): Path<i64>| async move {
            match id {
                1 => Ok(Json(serde_json::json!({
                    "id": 1,
                    "first_name": "Moussa",
                    "last_name": "Ka",
                    "email": "moussa.ka@example.com"
                }))),
                2 => Err(http::StatusCode::NOT_FOUND),
                _ => Err(http::StatusCode::INTERNAL_SERVER_ERROR),
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn lookup_for(addr: SocketAddr) -> HttpExistenceLookup {
    let mut entries = HashMap::new();
    entries.insert(
        "patient".to_owned(),
        Url::parse(&format!("http://{addr}")).unwrap(),
    );
    HttpExistenceLookup::new(
        HttpClient::new(),
        Arc::new(StaticRegistry::new(entries)),
        "patient",
        "patients",
    )
}

#[tokio::test]
async fn existing_entity_is_found_with_echoed_id() {
    let addr = spawn_patient_stub().await;
    let outcome = lookup_for(addr).exists(1).await.expect("lookup");
    assert_eq!(outcome, LookupOutcome::Found { id: 1 });
}

#[tokio::test]
async fn clean_404_is_absent_not_an_error() {
    let addr = spawn_patient_stub().await;
    let outcome = lookup_for(addr).exists(2).await.expect("lookup");
    assert_eq!(outcome, LookupOutcome::Absent);
}

#[tokio::test]
async fn server_error_is_upstream_failure() {
    let addr = spawn_patient_stub().await;
    let err = lookup_for(addr).exists(3).await.expect_err("500 upstream");
    assert!(matches!(err, LookupError::Upstream { service, .. } if service == "patient"));
}

#[tokio::test]
async fn connection_refused_is_upstream_failure_not_absent() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = lookup_for(addr).exists(1).await.expect_err("nobody home");
    assert!(matches!(err, LookupError::Upstream { .. }));
}

#[tokio::test]
async fn unregistered_service_is_upstream_failure() {
    let lookup = HttpExistenceLookup::new(
        HttpClient::new(),
        Arc::new(StaticRegistry::default()),
        "patient",
        "patients",
    );
    let err = lookup.exists(1).await.expect_err("no registry entry");
    assert!(matches!(err, LookupError::Upstream { .. }));
}
