use axum::{extract::Extension, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::types::{ErrorDetail, MessageResponse};
use crate::rashinban::{auth::Principal, SessionState};

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session revoked", body = MessageResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDetail)
    ),
    security(("bearer" = [])),
    tag = "auth"
)]
#[instrument(skip(state))]
pub async fn logout(
    principal: Principal,
    Extension(state): Extension<Arc<SessionState>>,
) -> (StatusCode, Json<MessageResponse>) {
    match principal.token() {
        Some(token) => {
            // A concurrent logout may have won the race; revocation is idempotent.
            if state.registry().revoke(token) {
                info!(
                    active_sessions = state.registry().len(),
                    "Session token revoked"
                );
            } else {
                debug!("Session token was already revoked");
            }
        }
        None => debug!("Bypass principal has no token to revoke"),
    }

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
