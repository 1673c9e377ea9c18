use axum::{
    http::{header::WWW_AUTHENTICATE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::rashinban::handlers::types::ErrorDetail;

/// Authentication failures. Every variant is terminal for the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header, or a scheme other than `Bearer `.
    #[error("Token not found")]
    MissingCredentials,
    /// Well-formed bearer header whose token is not active.
    #[error("Invalid token")]
    InvalidToken,
    /// Username or password mismatch; never says which.
    #[error("Incorrect username or password")]
    BadLoginCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (
            StatusCode::UNAUTHORIZED,
            [(WWW_AUTHENTICATE, "Bearer")],
            Json(body),
        )
            .into_response()
    }
}
