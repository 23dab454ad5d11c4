#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Round-trip tests against a real loopback server.

use std::net::SocketAddr;

use axum::routing::get;
use axum::{Json, Router};
use clininet_http::{HttpClient, HttpError};

async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/ping", get(|| async { Json(serde_json::json!({"ok": true})) }))
        .route(
            "/teapot",
            get(|| async { (http::StatusCode::IM_A_TEAPOT, "short and stout") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn gets_json_from_stub_server() {
    let addr = spawn_stub().await;
    let client = HttpClient::new();

    let resp = client
        .get(&format!("http://{addr}/ping"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(resp.status(), http::StatusCode::OK);
    let body: serde_json::Value = resp.json().expect("json body");
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn non_2xx_status_is_not_a_transport_error() {
    let addr = spawn_stub().await;
    let client = HttpClient::new();

    let resp = client
        .get(&format!("http://{addr}/teapot"))
        .send()
        .await
        .expect("status errors are returned as responses");

    assert_eq!(resp.status(), http::StatusCode::IM_A_TEAPOT);
    assert_eq!(resp.bytes().as_ref(), b"short and stout");
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind-then-drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new();
    let err = client
        .get(&format!("http://{addr}/ping"))
        .send()
        .await
        .expect_err("nobody is listening");

    assert!(matches!(err, HttpError::Transport(_)));
}

#[tokio::test]
async fn relative_url_is_rejected() {
    let client = HttpClient::new();
    let err = client.get("/relative").send().await.expect_err("no scheme");
    assert!(matches!(err, HttpError::InvalidUri { .. }));
}
