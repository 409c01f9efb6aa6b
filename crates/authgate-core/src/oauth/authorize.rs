//! Authorization endpoint request and result types.
//!
//! [`AuthorizeRequest`] is the raw parameter set as received by the HTTP
//! layer. [`ValidatedAuthorizeRequest`] is what the validator hands back on
//! success, for the consent screen and code or token issuance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::AuthResult;
use crate::error::AuthError;
use crate::types::Flow;

// =============================================================================
// Request
// =============================================================================

/// Authorization request parameters.
///
/// Every field is optional here; presence is checked by the validator so
/// that a missing parameter yields an OAuth error instead of a parse error.
///
/// # Example
///
/// ```ignore
/// GET /authorize?
///   client_id=code_client
///   &response_type=code
///   &scope=openid
///   &redirect_uri=https%3A%2F%2Fcode_client%2Fcallback
///   &state=xyz
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthorizeRequest {
    /// Client identifier.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Requested response type, e.g. `code` or `code id_token`.
    #[serde(default)]
    pub response_type: Option<String>,

    /// Space-separated list of requested scopes.
    #[serde(default)]
    pub scope: Option<String>,

    /// Redirect URI, compared exactly against the registration.
    #[serde(default)]
    pub redirect_uri: Option<String>,

    /// Opaque value echoed back to the client.
    #[serde(default)]
    pub state: Option<String>,

    /// Replay protection value echoed into the identity token.
    #[serde(default)]
    pub nonce: Option<String>,
}

impl AuthorizeRequest {
    /// Creates a request with the two mandatory parameters set.
    #[must_use]
    pub fn new(client_id: impl Into<String>, response_type: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            response_type: Some(response_type.into()),
            ..Default::default()
        }
    }

    /// Sets the `scope` parameter.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the `redirect_uri` parameter.
    #[must_use]
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Sets the `state` parameter.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the `nonce` parameter.
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Returns the requested scopes, splitting on whitespace.
    #[must_use]
    pub fn scopes(&self) -> Vec<String> {
        self.scope
            .as_deref()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

// =============================================================================
// Response Type
// =============================================================================

/// Supported `response_type` values.
///
/// The parameter is a space-separated set, so `id_token code` and
/// `code id_token` are the same response type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// `code`
    Code,
    /// `token`
    Token,
    /// `id_token`
    IdToken,
    /// `id_token token`
    IdTokenToken,
    /// `code id_token`
    CodeIdToken,
    /// `code token`
    CodeToken,
    /// `code id_token token`
    CodeIdTokenToken,
}

impl ResponseType {
    /// Parses a `response_type` parameter value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for an empty value, an unknown component or
    /// a repeated component.
    pub fn parse(value: &str) -> AuthResult<Self> {
        let mut code = false;
        let mut token = false;
        let mut id_token = false;

        for part in value.split_whitespace() {
            let seen = match part {
                "code" => &mut code,
                "token" => &mut token,
                "id_token" => &mut id_token,
                _ => {
                    return Err(AuthError::invalid_request(format!(
                        "Unsupported response_type: '{value}'"
                    )));
                }
            };
            if *seen {
                return Err(AuthError::invalid_request(format!(
                    "Duplicate component in response_type: '{value}'"
                )));
            }
            *seen = true;
        }

        match (code, id_token, token) {
            (true, false, false) => Ok(Self::Code),
            (false, false, true) => Ok(Self::Token),
            (false, true, false) => Ok(Self::IdToken),
            (false, true, true) => Ok(Self::IdTokenToken),
            (true, true, false) => Ok(Self::CodeIdToken),
            (true, false, true) => Ok(Self::CodeToken),
            (true, true, true) => Ok(Self::CodeIdTokenToken),
            (false, false, false) => Err(AuthError::invalid_request("response_type is required")),
        }
    }

    /// Returns the canonical parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Token => "token",
            Self::IdToken => "id_token",
            Self::IdTokenToken => "id_token token",
            Self::CodeIdToken => "code id_token",
            Self::CodeToken => "code token",
            Self::CodeIdTokenToken => "code id_token token",
        }
    }

    /// Returns the flow a client must be registered for to use this
    /// response type.
    #[must_use]
    pub fn flow(&self) -> Flow {
        match self {
            Self::Code => Flow::AuthorizationCode,
            Self::Token | Self::IdToken | Self::IdTokenToken => Flow::Implicit,
            Self::CodeIdToken | Self::CodeToken | Self::CodeIdTokenToken => Flow::Hybrid,
        }
    }

    /// Returns `true` if an identity token is returned from the authorize
    /// endpoint.
    #[must_use]
    pub fn includes_id_token(&self) -> bool {
        matches!(
            self,
            Self::IdToken | Self::IdTokenToken | Self::CodeIdToken | Self::CodeIdTokenToken
        )
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResponseType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =============================================================================
// Validated Request
// =============================================================================

/// An authorize request that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedAuthorizeRequest {
    /// The authenticated client.
    pub client_id: String,

    /// The resolved redirect URI, explicit or implicitly selected.
    pub redirect_uri: String,

    /// Flow implied by the response type.
    pub flow: Flow,

    /// Parsed response type.
    pub response_type: ResponseType,

    /// Validated scope names in request order, without duplicates.
    pub scopes: Vec<String>,

    /// Identity scopes among `scopes`.
    pub identity_scopes: Vec<String>,

    /// Resource scopes among `scopes`.
    pub resource_scopes: Vec<String>,

    /// Whether the consent screen must be shown.
    pub require_consent: bool,

    /// Echoed `state`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Echoed `nonce`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_types() {
        assert_eq!(ResponseType::parse("code").unwrap(), ResponseType::Code);
        assert_eq!(ResponseType::parse("token").unwrap(), ResponseType::Token);
        assert_eq!(ResponseType::parse("id_token").unwrap(), ResponseType::IdToken);
        assert_eq!(
            ResponseType::parse("id_token token").unwrap(),
            ResponseType::IdTokenToken
        );
        assert_eq!(
            ResponseType::parse("code id_token").unwrap(),
            ResponseType::CodeIdToken
        );
        assert_eq!(
            ResponseType::parse("code token").unwrap(),
            ResponseType::CodeToken
        );
        assert_eq!(
            ResponseType::parse("code id_token token").unwrap(),
            ResponseType::CodeIdTokenToken
        );
    }

    #[test]
    fn test_parse_is_order_insensitive() {
        assert_eq!(
            ResponseType::parse("token id_token").unwrap(),
            ResponseType::IdTokenToken
        );
        assert_eq!(
            ResponseType::parse("token id_token code").unwrap(),
            ResponseType::CodeIdTokenToken
        );
        assert_eq!(
            ResponseType::parse("  code   id_token ").unwrap(),
            ResponseType::CodeIdToken
        );
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for value in ["", "   ", "Code", "code code", "device", "code none", "code,token"] {
            let err = ResponseType::parse(value).unwrap_err();
            assert!(
                matches!(err, AuthError::InvalidRequest { .. }),
                "{value:?} should be invalid_request"
            );
        }
    }

    #[test]
    fn test_response_type_flow() {
        assert_eq!(ResponseType::Code.flow(), Flow::AuthorizationCode);
        assert_eq!(ResponseType::IdToken.flow(), Flow::Implicit);
        assert_eq!(ResponseType::IdTokenToken.flow(), Flow::Implicit);
        assert_eq!(ResponseType::CodeToken.flow(), Flow::Hybrid);
    }

    #[test]
    fn test_includes_id_token() {
        assert!(!ResponseType::Code.includes_id_token());
        assert!(!ResponseType::Token.includes_id_token());
        assert!(!ResponseType::CodeToken.includes_id_token());
        assert!(ResponseType::IdToken.includes_id_token());
        assert!(ResponseType::CodeIdTokenToken.includes_id_token());
    }

    #[test]
    fn test_request_scopes() {
        let request = AuthorizeRequest::new("c", "code").with_scope(" openid  api ");
        assert_eq!(request.scopes(), vec!["openid", "api"]);
        assert!(AuthorizeRequest::new("c", "code").scopes().is_empty());
    }

    #[test]
    fn test_request_deserialize_partial() {
        let request: AuthorizeRequest =
            serde_json::from_str(r#"{"client_id": "code_client", "scope": "openid"}"#).unwrap();
        assert_eq!(request.client_id.as_deref(), Some("code_client"));
        assert!(request.response_type.is_none());
        assert!(request.redirect_uri.is_none());
    }

    #[test]
    fn test_response_type_serializes_canonical() {
        let json = serde_json::to_string(&ResponseType::CodeIdToken).unwrap();
        assert_eq!(json, r#""code id_token""#);
        assert_eq!(ResponseType::parse("id_token code").unwrap().to_string(), "code id_token");
    }
}
