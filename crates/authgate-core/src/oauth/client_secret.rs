//! Client secret hashing and verification.
//!
//! Registered secrets are stored as one-way digests. At validation time the
//! presented plaintext is digested with the same [`SecretHasher`] and
//! compared, in constant time, against every secret that has not expired.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256, Sha512};

use crate::AuthResult;
use crate::clock::{Clock, SystemClock};
use crate::error::AuthError;
use crate::types::ClientSecret;

/// Generic description returned for every credential failure.
pub(crate) const INVALID_CLIENT_CREDENTIALS: &str = "Invalid client credentials";

// =============================================================================
// Hashing
// =============================================================================

/// One-way digest used for client secrets.
///
/// The same implementation must be used when registering a secret and when
/// validating it.
pub trait SecretHasher: Send + Sync {
    /// Returns the digest of `secret`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if the digest cannot be produced.
    fn digest(&self, secret: &str) -> AuthResult<String>;
}

/// SHA-256, base64 encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl SecretHasher for Sha256Hasher {
    fn digest(&self, secret: &str) -> AuthResult<String> {
        Ok(STANDARD.encode(Sha256::digest(secret.as_bytes())))
    }
}

/// SHA-512, base64 encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Hasher;

impl SecretHasher for Sha512Hasher {
    fn digest(&self, secret: &str) -> AuthResult<String> {
        Ok(STANDARD.encode(Sha512::digest(secret.as_bytes())))
    }
}

/// Constant-time comparison of two byte slices.
///
/// Only the length is allowed to leak.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

// =============================================================================
// Validator
// =============================================================================

/// Verifies presented client secrets against registered digests.
#[derive(Clone)]
pub struct ClientSecretValidator {
    hasher: Arc<dyn SecretHasher>,
    clock: Arc<dyn Clock>,
}

impl ClientSecretValidator {
    /// Creates a validator using the system clock.
    #[must_use]
    pub fn new(hasher: Arc<dyn SecretHasher>) -> Self {
        Self {
            hasher,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used for expiry checks.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the digest of `secret` with the configured hasher.
    ///
    /// # Errors
    ///
    /// Propagates hasher failures.
    pub fn hash(&self, secret: &str) -> AuthResult<String> {
        self.hasher.digest(secret)
    }

    /// Accepts `presented` if its digest equals any non-expired registered
    /// secret.
    ///
    /// Every candidate is compared even after a match is found. Wrong,
    /// empty, and expired secrets all fail with the same `InvalidClient`
    /// error.
    ///
    /// # Errors
    ///
    /// - `InvalidClient` if the secret does not match
    /// - `Internal` if hashing fails
    pub fn validate(&self, secrets: &[ClientSecret], presented: &str) -> AuthResult<()> {
        if presented.is_empty() {
            tracing::warn!("Client secret validation failed: empty secret presented");
            return Err(AuthError::invalid_client(INVALID_CLIENT_CREDENTIALS));
        }

        let now = self.clock.now();
        let presented_digest = self.hasher.digest(presented).map_err(|e| {
            tracing::error!(error = %e, "Failed to digest presented client secret");
            AuthError::internal("Failed to hash client secret")
        })?;

        let mut matched = false;
        for secret in secrets.iter().filter(|s| !s.is_expired(now)) {
            matched |= constant_time_eq(presented_digest.as_bytes(), secret.value.as_bytes());
        }

        if matched {
            Ok(())
        } else {
            tracing::warn!(
                registered = secrets.len(),
                "Client secret validation failed"
            );
            Err(AuthError::invalid_client(INVALID_CLIENT_CREDENTIALS))
        }
    }
}

impl std::fmt::Debug for ClientSecretValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSecretValidator").finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
