//! # authgate-core
//!
//! Validation and identity-assertion core of an OAuth 2.0 / OpenID Connect
//! provider.
//!
//! This crate provides:
//! - Authorize request validation with a single structured outcome
//! - Exact-match redirect URI resolution
//! - Client secret verification against hashed, expiring secrets
//! - Identity assertions with protocol claim filtering and deduplication
//!
//! ## Overview
//!
//! The core holds no state. Client and scope registrations come from a
//! [`storage::ClientStore`], secrets are digested by an
//! [`oauth::SecretHasher`] and time comes from a [`clock::Clock`]. Every
//! decision is returned as a value; HTTP serialization is left to the
//! caller.
//!
//! ## Modules
//!
//! - [`config`] - Validator configuration
//! - [`oauth`] - Authorize request validation and client authentication
//! - [`identity`] - Identity assertions and custom grant results
//! - [`claims`] - Protocol claim filter and claim deduplication
//! - [`constants`] - Reserved protocol claim types and well-known values
//! - [`outcome`] - Accept/reject validation outcome
//! - [`storage`] - Client and scope store trait
//! - [`clock`] - Injectable time source

pub mod claims;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod identity;
pub mod oauth;
pub mod outcome;
pub mod storage;
pub mod types;

pub use config::{ConfigError, HashAlgorithm, ValidatorConfig};
pub use error::{AuthError, ErrorCategory, ErrorCode};
pub use identity::{GrantValidationResult, IdentityAssertion, IdentityAssertionBuilder};
pub use oauth::{
    AuthorizeRequest, AuthorizeRequestValidator, ClientSecretValidator, ResponseType,
    ValidatedAuthorizeRequest, authenticate_client, parse_basic_auth,
};
pub use outcome::{ValidationError, ValidationOutcome};
pub use storage::{ClientStore, InMemoryClientStore};
pub use types::{Claim, Client, ClientSecret, ClientValidationError, Flow, Scope, ScopeType};

/// Type alias for validation results.
pub type AuthResult<T> = Result<T, AuthError>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use authgate_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::AuthResult;
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::{ConfigError, HashAlgorithm, ValidatorConfig};
    pub use crate::error::{AuthError, ErrorCategory, ErrorCode};
    pub use crate::identity::{GrantValidationResult, IdentityAssertion, IdentityAssertionBuilder};
    pub use crate::oauth::{
        AuthorizeRequest, AuthorizeRequestValidator, ClientSecretValidator, ResponseType,
        SecretHasher, ValidatedAuthorizeRequest, authenticate_client, parse_basic_auth,
    };
    pub use crate::outcome::{ValidationError, ValidationOutcome};
    pub use crate::storage::{ClientStore, InMemoryClientStore};
    pub use crate::types::{Claim, Client, ClientSecret, Flow, Scope, ScopeType};
}
