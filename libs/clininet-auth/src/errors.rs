use clininet_errors::Problem;
use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication required: missing or invalid token")]
    Unauthenticated,

    #[error("Forbidden: insufficient permissions")]
    Forbidden,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Auth configuration error: {0}")]
    InvalidConfig(String),
}

impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        // Response bodies deliberately do not name the role a path would
        // have required.
        let problem = match self {
            AuthError::Unauthenticated | AuthError::TokenExpired | AuthError::InvalidToken(_) => {
                Problem::new(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized",
                    "Authentication required",
                )
                .with_code("auth.unauthenticated")
            }
            AuthError::Forbidden => {
                Problem::new(StatusCode::FORBIDDEN, "Forbidden", "Access denied")
                    .with_code("auth.forbidden")
            }
            AuthError::InvalidConfig(_) => Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "Authorization layer misconfigured",
            )
            .with_code("auth.config"),
        };
        problem.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn maps_to_expected_statuses() {
        assert_eq!(
            AuthError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::TokenExpired.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
