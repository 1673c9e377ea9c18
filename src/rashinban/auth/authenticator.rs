//! Request gate: bypass header first, then the bearer token.

use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    response::{IntoResponse, Response},
};
use std::{fmt, sync::Arc};
use tracing::debug;

use super::{AuthError, SessionState};

/// Header that disables the bearer check for a single request.
pub const BYPASS_HEADER: &str = "x-bypass-mode";

const BYPASS_TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];
const BEARER_PREFIX: &str = "Bearer ";

/// Who the request was admitted as.
#[derive(Clone, PartialEq, Eq)]
pub enum Principal {
    /// Admitted by an active bearer token.
    Token(String),
    /// Admitted by `X-Bypass-Mode`; carries no token.
    Bypass,
}

impl Principal {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token),
            Self::Bypass => None,
        }
    }

    #[must_use]
    pub fn is_bypass(&self) -> bool {
        matches!(self, Self::Bypass)
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Principal::Token(..)"),
            Self::Bypass => f.write_str("Principal::Bypass"),
        }
    }
}

/// True when `X-Bypass-Mode` is set to `1`, `true`, `yes` or `on`
/// (trimmed, case-insensitive).
#[must_use]
pub fn bypass_requested(headers: &HeaderMap) -> bool {
    headers
        .get(BYPASS_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_lowercase())
        .is_some_and(|value| BYPASS_TRUTHY.contains(&value.as_str()))
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?;
    Some(token.trim().to_string())
}

/// Admit or reject a request from its headers.
///
/// The bypass check runs before, and short-circuits, every token check.
///
/// # Errors
/// `MissingCredentials` when there is no `Bearer ` authorization header,
/// `InvalidToken` when the token is not active.
pub fn authenticate(headers: &HeaderMap, state: &SessionState) -> Result<Principal, AuthError> {
    if state.allow_bypass() && bypass_requested(headers) {
        debug!("Request admitted via bypass header");
        return Ok(Principal::Bypass);
    }

    let Some(token) = extract_bearer_token(headers) else {
        debug!("Missing or malformed bearer authorization");
        return Err(AuthError::MissingCredentials);
    };

    if state.registry().contains(&token) {
        Ok(Principal::Token(token))
    } else {
        debug!("Bearer token is not active");
        Err(AuthError::InvalidToken)
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A missing extension is a wiring bug and surfaces as 500.
        let Extension(session) = Extension::<Arc<SessionState>>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        authenticate(&parts.headers, &session).map_err(IntoResponse::into_response)
    }
}
