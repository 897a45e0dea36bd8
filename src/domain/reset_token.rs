//! Password-reset token value object.
//!
//! The raw token is random alphanumeric text delivered to the user by
//! email; only its SHA-256 hex digest is stored server-side, so a leaked
//! reset table cannot be replayed.

use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

use crate::config::RESET_TOKEN_LENGTH;

/// A freshly generated reset token: the raw value to deliver and the
/// digest to persist.
pub struct ResetToken {
    raw: String,
    digest: String,
}

impl ResetToken {
    /// Generate a new random token.
    pub fn generate() -> Self {
        let raw: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(RESET_TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let digest = Self::digest_of(&raw);
        Self { raw, digest }
    }

    /// Compute the stored digest for a presented raw token.
    pub fn digest_of(raw: &str) -> String {
        format!("{:x}", Sha256::digest(raw.as_bytes()))
    }

    /// The raw token, delivered to the user exactly once.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The digest persisted in the password_resets table.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

// Don't expose the raw token in debug output
impl std::fmt::Debug for ResetToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetToken")
            .field("raw", &"[REDACTED]")
            .field("digest", &self.digest)
            .finish()
    }
}
