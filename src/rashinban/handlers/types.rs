//! Request/response types for session and service endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials submitted to `POST /login`. Not `Debug` so the password
/// cannot end up in a log line.
#[derive(ToSchema, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    #[must_use]
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Multipart form accepted by `POST /api/analyze_csv`.
#[derive(ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Error body returned for authentication failures.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn token_response_marks_bearer() -> Result<()> {
        let value = serde_json::to_value(TokenResponse::bearer("abc".to_string()))?;
        assert_eq!(value["access_token"], "abc");
        assert_eq!(value["token_type"], "bearer");
        Ok(())
    }

    #[test]
    fn login_request_requires_both_fields() {
        assert!(serde_json::from_str::<LoginRequest>(r#"{"username":"admin"}"#).is_err());
        assert!(
            serde_json::from_str::<LoginRequest>(r#"{"username":"a","password":"b"}"#).is_ok()
        );
    }
}
