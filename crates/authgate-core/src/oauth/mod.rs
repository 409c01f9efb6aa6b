//! OAuth 2.0 request validation.
//!
//! - [`validator`] - Authorize request validation (orchestrates the others)
//! - [`redirect_uri`] - Exact-match redirect URI resolution
//! - [`client_secret`] - Secret hashing and constant-time verification
//! - [`client_auth`] - Token endpoint client authentication
//! - [`authorize`] - Authorize request and result types

pub mod authorize;
pub mod client_auth;
pub mod client_secret;
pub mod redirect_uri;
pub mod validator;

pub use authorize::{AuthorizeRequest, ResponseType, ValidatedAuthorizeRequest};
pub use client_auth::{authenticate_client, parse_basic_auth};
pub use client_secret::{ClientSecretValidator, SecretHasher, Sha256Hasher, Sha512Hasher};
pub use redirect_uri::{is_registered_redirect_uri, resolve_redirect_uri};
pub use validator::AuthorizeRequestValidator;
