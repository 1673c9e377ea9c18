use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{header::CACHE_CONTROL, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::types::{ErrorDetail, LoginRequest, TokenResponse};
use crate::rashinban::{auth::AuthError, SessionState};

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = TokenResponse),
        (status = 400, description = "Missing or malformed payload", body = String),
        (status = 401, description = "Incorrect username or password", body = ErrorDetail)
    ),
    tag = "auth"
)]
#[instrument(skip(state, payload))]
pub async fn login(
    Extension(state): Extension<Arc<SessionState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(err) => {
            debug!("Rejected login payload: {err}");
            return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response();
        }
    };

    if !state
        .credentials()
        .verify(&request.username, &request.password)
    {
        warn!("Login rejected: credentials mismatch");
        return AuthError::BadLoginCredentials.into_response();
    }

    let token = state.registry().issue();
    info!(
        active_sessions = state.registry().len(),
        "Session token issued"
    );

    (
        StatusCode::OK,
        [(CACHE_CONTROL, "no-store")],
        Json(TokenResponse::bearer(token)),
    )
        .into_response()
}
