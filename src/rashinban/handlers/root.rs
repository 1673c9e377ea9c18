use axum::response::Json;

use super::types::MessageResponse;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = MessageResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("{} backend is running", env!("CARGO_PKG_NAME")),
    })
}
