//! The single username/password pair accepted by `POST /login`.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::cli::commands::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

/// Expected credentials, fixed at startup.
///
/// `Debug` output redacts the password through [`SecretString`].
#[derive(Clone, Debug)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(username: String, password: SecretString) -> Self {
        Self { username, password }
    }

    #[must_use]
    pub fn expected_credentials(&self) -> (&str, &SecretString) {
        (&self.username, &self.password)
    }

    /// Compare submitted values against the expected pair.
    ///
    /// Both fields are always compared in constant time and the results are
    /// combined without short-circuiting, so latency does not reveal which
    /// field was wrong. Input is matched exactly, with no normalization.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let password_ok = password
            .as_bytes()
            .ct_eq(self.password.expose_secret().as_bytes());

        (username_ok & password_ok).into()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(
            DEFAULT_USERNAME.to_string(),
            SecretString::from(DEFAULT_PASSWORD),
        )
    }
}
