//! Validator configuration.
//!
//! # Example (TOML)
//!
//! ```toml
//! [validator]
//! builtin_identity_provider = "local"
//! secret_hash_algorithm = "sha512"
//! require_openid_for_id_token = true
//! max_scope_count = 64
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::BUILT_IN_IDENTITY_PROVIDER;
use crate::identity::IdentityAssertionBuilder;
use crate::oauth::client_secret::{SecretHasher, Sha256Hasher, Sha512Hasher};

/// Settings for the authorize request validator and the credential validator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Identity provider tag used when a grant does not name one.
    pub builtin_identity_provider: String,

    /// Digest algorithm used for registered client secrets.
    /// Must match the algorithm used at registration time.
    pub secret_hash_algorithm: HashAlgorithm,

    /// Reject `id_token` response types that do not request `openid`.
    pub require_openid_for_id_token: bool,

    /// Upper bound on scopes per request. 0 disables the limit.
    pub max_scope_count: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            builtin_identity_provider: BUILT_IN_IDENTITY_PROVIDER.to_string(),
            secret_hash_algorithm: HashAlgorithm::default(),
            require_openid_for_id_token: true,
            max_scope_count: 64,
        }
    }
}

impl ValidatorConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the built-in identity provider tag
    /// is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.builtin_identity_provider.trim().is_empty() {
            return Err(ConfigError::Missing(
                "builtin_identity_provider".to_string(),
            ));
        }

        if self.builtin_identity_provider.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "builtin_identity_provider '{}' must not contain whitespace",
                self.builtin_identity_provider
            )));
        }

        Ok(())
    }

    /// Starts an assertion that falls back to the configured identity
    /// provider tag.
    #[must_use]
    pub fn assertion_builder(
        &self,
        subject: impl Into<String>,
        authentication_method: impl Into<String>,
    ) -> IdentityAssertionBuilder {
        IdentityAssertionBuilder::new(subject, authentication_method)
            .with_default_identity_provider(self.builtin_identity_provider.as_str())
    }

    /// Returns `true` if `count` scopes exceed the configured limit.
    #[must_use]
    pub fn exceeds_scope_limit(&self, count: usize) -> bool {
        self.max_scope_count != 0 && count > self.max_scope_count
    }
}

/// Supported secret digest algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
    /// SHA-512.
    #[default]
    Sha512,
}

impl HashAlgorithm {
    /// Returns the lowercase algorithm name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Builds the hasher for this algorithm.
    #[must_use]
    pub fn hasher(&self) -> Arc<dyn SecretHasher> {
        match self {
            Self::Sha256 => Arc::new(Sha256Hasher),
            Self::Sha512 => Arc::new(Sha512Hasher),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An invalid configuration value was provided.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// A required configuration value is missing.
    #[error("Missing required configuration: {0}")]
    Missing(String),
}
