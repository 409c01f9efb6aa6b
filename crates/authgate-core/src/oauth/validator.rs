//! Authorize request validation.
//!
//! [`AuthorizeRequestValidator`] runs every check an authorize request must
//! pass and produces a single [`ValidationOutcome`]. Checks run in a fixed
//! order and stop at the first failure:
//!
//! 1. Request shape (`client_id` and `response_type` present and parseable)
//! 2. Client lookup (unknown or disabled)
//! 3. Flow allowed for the client
//! 4. Redirect URI
//! 5. Scopes
//!
//! The order decides which error code surfaces when several checks would
//! fail; redirect URI problems are always reported before scope problems.

use std::collections::HashSet;
use std::sync::Arc;

use crate::AuthResult;
use crate::config::ValidatorConfig;
use crate::constants::OPENID_SCOPE;
use crate::error::{AuthError, ErrorCategory};
use crate::oauth::authorize::{AuthorizeRequest, ResponseType, ValidatedAuthorizeRequest};
use crate::oauth::redirect_uri::resolve_redirect_uri;
use crate::outcome::ValidationOutcome;
use crate::storage::ClientStore;
use crate::types::{Client, Scope};

/// Validates authorize requests against the client and scope registry.
///
/// Stateless apart from its collaborators; one instance can serve any
/// number of concurrent requests.
///
/// # Usage
///
/// ```ignore
/// use authgate_core::oauth::{AuthorizeRequest, AuthorizeRequestValidator};
///
/// let validator = AuthorizeRequestValidator::new(store, ValidatorConfig::default());
/// let outcome = validator
///     .validate(&AuthorizeRequest::new("code_client", "code").with_scope("openid"))
///     .await;
/// ```
#[derive(Clone)]
pub struct AuthorizeRequestValidator {
    store: Arc<dyn ClientStore>,
    config: ValidatorConfig,
}

impl AuthorizeRequestValidator {
    /// Creates a validator over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ClientStore>, config: ValidatorConfig) -> Self {
        Self { store, config }
    }

    /// Returns the validator configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates an authorize request.
    ///
    /// Never fails outright: collaborator faults become a `server_error`
    /// outcome.
    pub async fn validate(
        &self,
        request: &AuthorizeRequest,
    ) -> ValidationOutcome<ValidatedAuthorizeRequest> {
        let client_id = request.client_id.as_deref().unwrap_or_default();

        let result = self.check(request).await;
        match &result {
            Ok(validated) => {
                tracing::debug!(
                    client_id = %validated.client_id,
                    response_type = %validated.response_type,
                    scopes = validated.scopes.len(),
                    "Authorize request accepted"
                );
            }
            Err(e) => {
                let code = e.error_code();
                match e.category() {
                    ErrorCategory::Internal => {
                        tracing::error!(client_id = %client_id, code = %code, error = %e, "Authorize request failed");
                    }
                    ErrorCategory::Credential | ErrorCategory::Configuration => {
                        tracing::warn!(client_id = %client_id, code = %code, error = %e, "Authorize request rejected");
                    }
                    ErrorCategory::Request => {
                        tracing::debug!(client_id = %client_id, code = %code, error = %e, "Authorize request rejected");
                    }
                }
            }
        }
        ValidationOutcome::from(result)
    }

    async fn check(&self, request: &AuthorizeRequest) -> AuthResult<ValidatedAuthorizeRequest> {
        // 1. Validate request shape
        let client_id = request
            .client_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AuthError::invalid_request("client_id is required"))?;

        let response_type = request
            .response_type
            .as_deref()
            .ok_or_else(|| AuthError::invalid_request("response_type is required"))
            .and_then(ResponseType::parse)?;

        // 2. Validate client exists and is enabled
        let client = self
            .store
            .find_client(client_id)
            .await?
            .ok_or_else(|| AuthError::unknown_client("Unknown client"))?;

        if !client.enabled {
            return Err(AuthError::unauthorized_client("Client is disabled"));
        }

        // 3. Validate flow is allowed for this client
        let flow = response_type.flow();
        if !client.is_flow_allowed(flow) {
            return Err(AuthError::unauthorized_client(format!(
                "response_type '{}' requires the {} flow, which is not allowed for this client",
                response_type, flow
            )));
        }

        // 4. Validate redirect_uri; a blank parameter counts as absent
        let requested_uri = request
            .redirect_uri
            .as_deref()
            .filter(|uri| !uri.trim().is_empty());
        let redirect_uri = resolve_redirect_uri(&client.redirect_uris, requested_uri)?;

        // 5. Validate scopes
        let scopes = self
            .check_scopes(&client, response_type, request.scopes())
            .await?;

        Ok(ValidatedAuthorizeRequest {
            client_id: client.client_id,
            redirect_uri,
            flow,
            response_type,
            scopes: scopes.names,
            identity_scopes: scopes.identity,
            resource_scopes: scopes.resource,
            require_consent: client.require_consent,
            state: request.state.clone(),
            nonce: request.nonce.clone(),
        })
    }

    async fn check_scopes(
        &self,
        client: &Client,
        response_type: ResponseType,
        requested: Vec<String>,
    ) -> AuthResult<ValidatedScopes> {
        let mut seen = HashSet::new();
        let requested: Vec<String> = requested
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect();

        if requested.is_empty() {
            return Err(AuthError::invalid_scope("scope is required"));
        }

        if self.config.exceeds_scope_limit(requested.len()) {
            return Err(AuthError::invalid_scope(format!(
                "Too many scopes requested: {} (max {})",
                requested.len(),
                self.config.max_scope_count
            )));
        }

        if let Some(scope) = requested.iter().find(|s| !client.is_scope_allowed(s)) {
            return Err(AuthError::invalid_scope(format!(
                "Scope '{scope}' is not allowed for this client"
            )));
        }

        let registered = self.store.list_scopes().await?;
        let mut validated = ValidatedScopes::default();
        for name in requested {
            let scope = find_enabled_scope(&registered, &name)
                .ok_or_else(|| AuthError::invalid_scope(format!("Unknown scope '{name}'")))?;
            if scope.is_identity() {
                validated.identity.push(name.clone());
            } else {
                validated.resource.push(name.clone());
            }
            validated.names.push(name);
        }

        if self.config.require_openid_for_id_token
            && response_type.includes_id_token()
            && !validated.names.iter().any(|s| s == OPENID_SCOPE)
        {
            return Err(AuthError::invalid_scope(format!(
                "response_type '{response_type}' requires the '{OPENID_SCOPE}' scope"
            )));
        }

        Ok(validated)
    }
}

impl std::fmt::Debug for AuthorizeRequestValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizeRequestValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct ValidatedScopes {
    names: Vec<String>,
    identity: Vec<String>,
    resource: Vec<String>,
}

fn find_enabled_scope<'a>(registered: &'a [Scope], name: &str) -> Option<&'a Scope> {
    registered.iter().find(|s| s.enabled && s.name == name)
}

// =============================================================================
// Tests
// =============================================================================
