//! Session authentication: credential check, token registry, and the request gate.
//!
//! Flow Overview: `POST /login` verifies the configured credentials and issues a
//! token into the [`TokenRegistry`]. Protected handlers take a [`Principal`]
//! argument, which runs [`authenticate`] before the handler body. `POST /logout`
//! revokes the presented token.
//!
//! A token is either absent or active. Issuance makes it active; revocation or a
//! process restart makes it absent again. There is no expiry.

mod authenticator;
mod credentials;
mod error;
mod registry;

pub use authenticator::{authenticate, bypass_requested, Principal, BYPASS_HEADER};
pub use credentials::Credentials;
pub use error::AuthError;
pub use registry::TokenRegistry;

/// Shared session state injected into handlers via `Extension<Arc<SessionState>>`.
#[derive(Debug)]
pub struct SessionState {
    credentials: Credentials,
    registry: TokenRegistry,
    allow_bypass: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(credentials: Credentials, allow_bypass: bool) -> Self {
        Self {
            credentials,
            registry: TokenRegistry::new(),
            allow_bypass,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// Whether `X-Bypass-Mode` is honored for this process.
    #[must_use]
    pub fn allow_bypass(&self) -> bool {
        self.allow_bypass
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Credentials::default(), true)
    }
}
