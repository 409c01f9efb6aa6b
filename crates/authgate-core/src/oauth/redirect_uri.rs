//! Redirect URI validation.
//!
//! Requested redirect URIs are compared byte-for-byte against the client's
//! registered URIs. No normalization is performed: a different case, a
//! trailing slash, percent-encoding or reordered query parameters all make
//! a different URI.

use crate::AuthResult;
use crate::error::AuthError;

/// Resolves the redirect URI for an authorize request.
///
/// - Request supplies a URI: accepted only if it equals a registered URI
///   exactly, otherwise `UnauthorizedClient`.
/// - Request omits the URI and exactly one is registered: that one is
///   selected.
/// - Request omits the URI and several are registered: `InvalidRequest`,
///   the client must disambiguate.
/// - Request omits the URI and none is registered: `UnauthorizedClient`.
///
/// Returns the selected URI, unchanged.
///
/// # Example
///
/// ```
/// use authgate_core::oauth::resolve_redirect_uri;
///
/// let registered = vec!["https://code_client/callback?foo=bar&baz=quux".to_string()];
/// assert!(resolve_redirect_uri(&registered, Some("https://code_client/callback?baz=quux&foo=bar")).is_err());
/// assert_eq!(resolve_redirect_uri(&registered, None).unwrap(), registered[0]);
/// ```
///
/// # Errors
///
/// See above.
pub fn resolve_redirect_uri(registered: &[String], requested: Option<&str>) -> AuthResult<String> {
    match requested {
        Some(uri) => {
            if is_registered_redirect_uri(registered, uri) {
                Ok(uri.to_string())
            } else {
                Err(AuthError::redirect_mismatch(
                    "redirect_uri is not registered for this client",
                ))
            }
        }
        None => match registered {
            [only] => Ok(only.clone()),
            [] => Err(AuthError::redirect_mismatch(
                "Client has no registered redirect_uri",
            )),
            _ => Err(AuthError::invalid_request(
                "redirect_uri is required when multiple redirect URIs are registered",
            )),
        },
    }
}

/// Returns `true` if `uri` is byte-for-byte equal to a registered URI.
#[must_use]
pub fn is_registered_redirect_uri(registered: &[String], uri: &str) -> bool {
    registered.iter().any(|r| r == uri)
}
