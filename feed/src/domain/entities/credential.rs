//! Credential entity
//!
//! The opaque access token that scopes a user's feed.

use sha2::{Digest, Sha256};

/// Opaque authorization token.
///
/// Compared by value: a different token means a different user-scoped
/// dataset. `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for building the authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short SHA-256 fingerprint, safe to log
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..6])
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential({})", self.fingerprint())
    }
}
