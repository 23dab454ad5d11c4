use std::sync::Arc;

use axum::routing::get;
use axum::{middleware::from_fn_with_state, Json, Router};
use tower_http::trace::TraceLayer;

use clininet_auth::{PolicyTable, TokenValidator};
use clininet_http::HttpClient;
use clininet_registry::ServiceRegistry;

use crate::middleware::auth::auth_middleware;
use crate::proxy::proxy;

/// Shared state of the gateway.
#[derive(Clone)]
pub struct GatewayState {
    pub validator: Arc<TokenValidator>,
    pub policy: Arc<PolicyTable>,
    pub registry: Arc<dyn ServiceRegistry>,
    pub client: HttpClient,
}

/// Build the gateway router: the gateway's own health endpoint plus a
/// catch-all proxy, everything behind the auth gates.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(proxy)
        .layer(from_fn_with_state(state.clone(), auth_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "up" }))
}
