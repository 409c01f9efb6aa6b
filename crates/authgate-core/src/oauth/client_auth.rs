//! Client authentication for the token endpoint.
//!
//! Transport-independent: callers extract the credentials (for example with
//! [`parse_basic_auth`] or from the request body) and hand them over as
//! plain strings.

use crate::AuthResult;
use crate::error::AuthError;
use crate::oauth::client_secret::{ClientSecretValidator, INVALID_CLIENT_CREDENTIALS};
use crate::storage::ClientStore;
use crate::types::Client;

/// Authenticates a confidential client by id and secret.
///
/// Unknown clients, disabled clients and bad secrets all fail with the same
/// `InvalidClient` description so the response cannot be used to enumerate
/// which client ids exist.
///
/// # Errors
///
/// - `InvalidClient` if authentication fails
/// - `Storage` / `Internal` if a collaborator fails (surfaced as `server_error`)
pub async fn authenticate_client(
    store: &dyn ClientStore,
    client_id: &str,
    client_secret: &str,
    validator: &ClientSecretValidator,
) -> AuthResult<Client> {
    if client_id.is_empty() {
        return Err(AuthError::invalid_client(INVALID_CLIENT_CREDENTIALS));
    }

    // 1. Look up client
    let client = store.find_client(client_id).await.map_err(|e| {
        tracing::error!(client_id = %client_id, error = %e, "Client store lookup failed");
        e
    })?;

    let Some(client) = client else {
        tracing::warn!(client_id = %client_id, "Authentication attempted for unknown client");
        return Err(AuthError::invalid_client(INVALID_CLIENT_CREDENTIALS));
    };

    if !client.enabled {
        tracing::warn!(client_id = %client_id, "Authentication attempted for disabled client");
        return Err(AuthError::invalid_client(INVALID_CLIENT_CREDENTIALS));
    }

    // 2. Verify secret
    validator.validate(&client.client_secrets, client_secret)?;

    tracing::debug!(client_id = %client_id, "Client authenticated");
    Ok(client)
}

/// Parses an HTTP Basic `Authorization` header value.
///
/// Returns `Some((client_id, client_secret))` if valid, `None` otherwise.
/// The secret may contain colons; only the first one separates the pair.
///
/// # Example
///
/// ```
/// use authgate_core::oauth::parse_basic_auth;
///
/// let (id, secret) = parse_basic_auth("Basic Y29kZV9jbGllbnQ6c2VjcmV0").unwrap();
/// assert_eq!(id, "code_client");
/// assert_eq!(secret, "secret");
/// ```
#[must_use]
pub fn parse_basic_auth(header_value: &str) -> Option<(String, String)> {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    let encoded = header_value.trim().strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;

    let (client_id, client_secret) = credentials.split_once(':')?;

    Some((client_id.to_string(), client_secret.to_string()))
}
