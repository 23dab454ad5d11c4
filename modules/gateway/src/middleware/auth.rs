use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use clininet_auth::AuthError;

use crate::routes::GatewayState;

/// Authentication and authorization gates, in that order.
///
/// The public allow-list is checked before anything else; a public path
/// reaches the backend with no credential at all. Everything else needs a
/// valid bearer token, and role-restricted prefixes additionally need one
/// of the allowed roles. Validated claims are attached to the request for
/// downstream logging.
pub async fn auth_middleware(
    State(state): State<GatewayState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let path = req.uri().path().to_owned();

    if state.policy.is_public(&path) {
        debug!(%path, "public path, skipping authentication");
        return Ok(next.run(req).await);
    }

    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
        .ok_or(AuthError::Unauthenticated)?;
    let token = bearer.strip_prefix("Bearer ").unwrap_or(&bearer);

    let claims = state.validator.validate(token)?;
    state.policy.authorize(&path, &claims)?;

    debug!(%path, sub = %claims.sub, "request authorized");
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
