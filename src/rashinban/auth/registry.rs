//! In-memory set of active session tokens.

use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};
use std::{
    collections::HashSet,
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Bytes of OS entropy behind each token.
pub const TOKEN_BYTES: usize = 32;

/// Active tokens. Membership is the only notion of validity.
///
/// A single mutex serializes `issue`, `revoke` and `contains`; none of them
/// await while holding it.
#[derive(Default)]
pub struct TokenRegistry {
    tokens: Mutex<HashSet<String>>,
}

impl TokenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // The set has no invariant a panicking holder could break, so a poisoned
    // lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generate a fresh token, mark it active and return it.
    #[must_use]
    pub fn issue(&self) -> String {
        let mut tokens = self.lock();
        loop {
            let token = generate_token();
            if tokens.insert(token.clone()) {
                return token;
            }
        }
    }

    /// Deactivate `token`. Returns `false` when it was not active.
    pub fn revoke(&self, token: &str) -> bool {
        self.lock().remove(token)
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    /// Number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl fmt::Debug for TokenRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRegistry")
            .field("active", &self.len())
            .finish()
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    Base64UrlUnpadded::encode_string(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn issued_token_is_active_until_revoked() {
        let registry = TokenRegistry::new();
        let token = registry.issue();
        assert!(registry.contains(&token));

        assert!(registry.revoke(&token));
        assert!(!registry.contains(&token));
        assert!(registry.is_empty());
    }

    #[test]
    fn revoke_is_idempotent() {
        let registry = TokenRegistry::new();
        let kept = registry.issue();
        let dropped = registry.issue();

        assert!(registry.revoke(&dropped));
        assert!(!registry.revoke(&dropped));
        assert!(!registry.revoke("never-issued"));

        assert!(registry.contains(&kept));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn contains_does_not_mutate() {
        let registry = TokenRegistry::new();
        assert!(!registry.contains("probe"));
        assert!(registry.is_empty());
    }

    #[test]
    fn tokens_are_url_safe_and_carry_32_bytes() -> anyhow::Result<()> {
        let registry = TokenRegistry::new();
        let token = registry.issue();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        let decoded = Base64UrlUnpadded::decode_vec(&token)
            .map_err(|e| anyhow::anyhow!("token is not base64url: {e}"))?;
        assert_eq!(decoded.len(), TOKEN_BYTES);
        Ok(())
    }

    #[test]
    fn ten_thousand_issuances_never_collide() {
        let registry = TokenRegistry::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(registry.issue()));
        }
        assert_eq!(registry.len(), 10_000);
    }

    #[test]
    fn concurrent_issue_and_revoke() {
        let registry = Arc::new(TokenRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let mut kept = Vec::new();
                    for i in 0..250 {
                        let token = registry.issue();
                        if i % 2 == 0 {
                            registry.revoke(&token);
                        } else {
                            kept.push(token);
                        }
                    }
                    kept
                })
            })
            .collect();

        let mut kept = Vec::new();
        for handle in handles {
            if let Ok(tokens) = handle.join() {
                kept.extend(tokens);
            }
        }

        assert_eq!(kept.len(), 8 * 125);
        assert_eq!(registry.len(), kept.len());
        assert!(kept.iter().all(|token| registry.contains(token)));
    }

    #[test]
    fn debug_hides_tokens() {
        let registry = TokenRegistry::new();
        let token = registry.issue();
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("active: 1"));
        assert!(!rendered.contains(&token));
    }
}
