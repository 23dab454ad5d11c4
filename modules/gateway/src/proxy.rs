use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::Response;
use http_body_util::Full;
use tracing::{debug, warn};

use clininet_errors::Problem;

use crate::routes::GatewayState;

/// Request bodies over this size are rejected before forwarding.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Hop-by-hop headers never copied across the proxy boundary.
const HOP_BY_HOP: &[HeaderName] = &[
    header::CONNECTION,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::TE,
    header::TRAILER,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
];

/// Routing gate: first path segment names the backend service; the rest of
/// the request goes through verbatim and the response comes back verbatim.
pub async fn proxy(State(state): State<GatewayState>, req: Request) -> Result<Response, Problem> {
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(ToOwned::to_owned);

    let (service, remaining) = split_first_segment(&path).ok_or_else(|| {
        Problem::new(StatusCode::NOT_FOUND, "Not Found", "No service in path")
            .with_code("route.unknown")
            .with_instance(&path)
    })?;

    let base = state.registry.resolve(service).map_err(|e| {
        warn!(%service, error = %e, "no route for service");
        Problem::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            format!("No route for service '{service}'"),
        )
        .with_code("route.unknown")
        .with_instance(&path)
    })?;

    let mut target = format!("{}{}", base.as_str().trim_end_matches('/'), remaining);
    if let Some(q) = query {
        target.push('?');
        target.push_str(&q);
    }

    // Collect the inbound body so it can be replayed to the backend.
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        Problem::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "Payload Too Large",
            e.to_string(),
        )
        .with_code("request.too_large")
        .with_instance(&path)
    })?;

    let mut builder = http::Request::builder().method(parts.method.clone()).uri(&target);
    for (name, value) in &parts.headers {
        if name == header::HOST || HOP_BY_HOP.contains(name) {
            continue;
        }
        builder = builder.header(name, value);
    }
    let outbound = builder.body(Full::new(bytes)).map_err(|e| {
        Problem::new(StatusCode::BAD_GATEWAY, "Bad Gateway", e.to_string())
            .with_code("gateway.forward")
            .with_instance(&path)
    })?;

    debug!(%service, %target, method = %parts.method, "forwarding request");

    let response = state.client.send(outbound).await.map_err(|e| {
        warn!(%service, error = %e, "backend unreachable");
        Problem::new(
            StatusCode::BAD_GATEWAY,
            "Bad Gateway",
            format!("Service '{service}' unreachable"),
        )
        .with_code("gateway.upstream")
        .with_instance(&path)
    })?;

    // Relay the backend response unmodified.
    let (status, headers, body) = response.into_parts();
    let mut relay = Response::builder().status(status);
    for (name, value) in &headers {
        if HOP_BY_HOP.contains(name) {
            continue;
        }
        relay = relay.header(name, value);
    }
    relay.body(Body::from(body)).map_err(|e| {
        Problem::new(StatusCode::BAD_GATEWAY, "Bad Gateway", e.to_string())
            .with_code("gateway.relay")
            .with_instance(&path)
    })
}

/// Split `/patient/api/v1/...` into `("patient", "/api/v1/...")`.
fn split_first_segment(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.strip_prefix('/')?;
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.find('/') {
        Some(idx) => Some((&trimmed[..idx], &trimmed[idx..])),
        None => Some((trimmed, "/")),
    }
}

#[cfg(test)]
mod tests {
    use super::split_first_segment;

    #[test]
    fn splits_service_and_remaining_path() {
        assert_eq!(
            split_first_segment("/patient/api/v1/patients/42"),
            Some(("patient", "/api/v1/patients/42"))
        );
    }

    #[test]
    fn bare_service_maps_to_root() {
        assert_eq!(split_first_segment("/patient"), Some(("patient", "/")));
        assert_eq!(split_first_segment("/patient/"), Some(("patient", "/")));
    }

    #[test]
    fn root_has_no_service() {
        assert_eq!(split_first_segment("/"), None);
        assert_eq!(split_first_segment(""), None);
    }
}
