//! OAuth 2.0 Client domain types.
//!
//! Client records are loaded by an external store and are read-only to the
//! core. Registered redirect URIs are opaque strings: they are never parsed
//! or normalized here.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// Flow
// =============================================================================

/// OAuth 2.0 / OpenID Connect flows a client may be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Authorization Code flow.
    AuthorizationCode,
    /// Implicit flow (tokens returned from the authorize endpoint).
    Implicit,
    /// Hybrid flow (code plus tokens from the authorize endpoint).
    Hybrid,
    /// Client Credentials flow.
    ClientCredentials,
    /// Resource Owner Password Credentials flow.
    ResourceOwner,
    /// Extension grant handled by a custom grant validator.
    Custom,
}

impl Flow {
    /// Returns the snake_case name of the flow.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::Implicit => "implicit",
            Self::Hybrid => "hybrid",
            Self::ClientCredentials => "client_credentials",
            Self::ResourceOwner => "resource_owner",
            Self::Custom => "custom",
        }
    }

    /// Returns `true` if the flow goes through the authorize endpoint and
    /// therefore needs a redirect URI.
    #[must_use]
    pub fn uses_redirect(&self) -> bool {
        matches!(self, Self::AuthorizationCode | Self::Implicit | Self::Hybrid)
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Client Secret
// =============================================================================

/// A registered client secret.
///
/// `value` is the one-way digest produced at registration time, never the
/// plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSecret {
    /// Digest of the secret.
    pub value: String,

    /// Free-form description (e.g. "rotated 2026-01").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Instant after which the secret is no longer accepted.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration: Option<OffsetDateTime>,
}

impl ClientSecret {
    /// Creates a non-expiring secret from a digest.
    #[must_use]
    pub fn new(digest: impl Into<String>) -> Self {
        Self {
            value: digest.into(),
            description: None,
            expiration: None,
        }
    }

    /// Sets the expiration instant.
    #[must_use]
    pub fn with_expiration(mut self, expiration: OffsetDateTime) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if the secret has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expiration.is_some_and(|exp| exp <= now)
    }
}

// =============================================================================
// Client
// =============================================================================

/// OAuth 2.0 client registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier used in OAuth flows.
    pub client_id: String,

    /// Human-readable display name.
    #[serde(default)]
    pub client_name: String,

    /// Whether this client can currently be used.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Registered secrets (digests), each with optional expiry.
    #[serde(default)]
    pub client_secrets: Vec<ClientSecret>,

    /// Registered redirect URIs, compared byte-for-byte.
    #[serde(default)]
    pub redirect_uris: Vec<String>,

    /// The flow this client is allowed to use.
    pub flow: Flow,

    /// Whether the user must grant consent before tokens are issued.
    #[serde(default = "default_true")]
    pub require_consent: bool,

    /// Allow every enabled scope, ignoring `allowed_scopes`.
    #[serde(default)]
    pub allow_access_to_all_scopes: bool,

    /// Scope names this client may request.
    #[serde(default)]
    pub allowed_scopes: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Client {
    /// Creates an enabled client for `flow` with no secrets, URIs or scopes.
    #[must_use]
    pub fn new(client_id: impl Into<String>, flow: Flow) -> Self {
        let client_id = client_id.into();
        Self {
            client_name: client_id.clone(),
            client_id,
            enabled: true,
            client_secrets: Vec::new(),
            redirect_uris: Vec::new(),
            flow,
            require_consent: true,
            allow_access_to_all_scopes: false,
            allowed_scopes: Vec::new(),
        }
    }

    /// Validates the client registration.
    ///
    /// # Errors
    ///
    /// Returns an error if the registration is unusable.
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.client_id.is_empty() {
            return Err(ClientValidationError::EmptyClientId);
        }

        if self.flow.uses_redirect() && self.redirect_uris.is_empty() {
            return Err(ClientValidationError::NoRedirectUris(self.flow));
        }

        if self.redirect_uris.iter().any(String::is_empty) {
            return Err(ClientValidationError::EmptyRedirectUri);
        }

        Ok(())
    }

    /// Checks if the client is registered for `flow`.
    #[must_use]
    pub fn is_flow_allowed(&self, flow: Flow) -> bool {
        self.flow == flow
    }

    /// Checks if `scope` may be requested by this client.
    ///
    /// Only the client's own registration is consulted; whether the scope
    /// exists at all is decided against the scope store.
    #[must_use]
    pub fn is_scope_allowed(&self, scope: &str) -> bool {
        self.allow_access_to_all_scopes || self.allowed_scopes.iter().any(|s| s == scope)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Errors that can occur during client registration validation.
#[derive(Debug, thiserror::Error)]
pub enum ClientValidationError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty")]
    EmptyClientId,

    /// Redirect-based flows require at least one redirect URI.
    #[error("Flow {0} requires at least one redirect URI")]
    NoRedirectUris(Flow),

    /// A registered redirect URI is the empty string.
    #[error("Registered redirect URIs cannot be empty")]
    EmptyRedirectUri,
}

// =============================================================================
// Tests
// =============================================================================
