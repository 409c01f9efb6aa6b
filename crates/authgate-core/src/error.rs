//! Validation error types and OAuth 2.0 error codes.
//!
//! [`AuthError`] is the internal error currency of the crate. Every variant
//! maps onto exactly one of the stable [`ErrorCode`] strings surfaced to the
//! HTTP layer, and onto an [`ErrorCategory`] that tells callers whether the
//! requester or the system is at fault.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur while validating a request or building an assertion.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The request is missing a required parameter or is otherwise malformed.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of why the request is invalid.
        message: String,
    },

    /// The client is unknown or failed authentication.
    #[error("Invalid client: {message}")]
    InvalidClient {
        /// Description of why the client is invalid.
        message: String,
        /// `Credential` for failed authentication, `Configuration` for an
        /// unknown client at the authorize endpoint.
        category: ErrorCategory,
    },

    /// The client is not allowed to use the requested flow or redirect URI.
    #[error("Unauthorized client: {message}")]
    UnauthorizedClient {
        /// Description of why the client is not authorized.
        message: String,
        /// `Configuration` for a disabled client or flow, `Request` for a
        /// redirect URI the request got wrong.
        category: ErrorCategory,
    },

    /// The requested scope is invalid, unknown, or not allowed.
    #[error("Invalid scope: {message}")]
    InvalidScope {
        /// Description of why the scope is invalid.
        message: String,
    },

    /// The resource owner or the server denied the request.
    #[error("Access denied: {message}")]
    AccessDenied {
        /// Description of why access was denied.
        message: String,
    },

    /// A storage collaborator failed.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error.
        message: String,
    },

    /// The validator configuration is invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
    },

    /// An unexpected internal error occurred (e.g. hashing failure).
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl AuthError {
    /// Creates a new `InvalidRequest` error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a new `InvalidClient` error for failed client authentication.
    #[must_use]
    pub fn invalid_client(message: impl Into<String>) -> Self {
        Self::InvalidClient {
            message: message.into(),
            category: ErrorCategory::Credential,
        }
    }

    /// Creates a new `InvalidClient` error for a client id with no registration.
    #[must_use]
    pub fn unknown_client(message: impl Into<String>) -> Self {
        Self::InvalidClient {
            message: message.into(),
            category: ErrorCategory::Configuration,
        }
    }

    /// Creates a new `UnauthorizedClient` error for a client whose
    /// registration forbids the request.
    #[must_use]
    pub fn unauthorized_client(message: impl Into<String>) -> Self {
        Self::UnauthorizedClient {
            message: message.into(),
            category: ErrorCategory::Configuration,
        }
    }

    /// Creates a new `UnauthorizedClient` error for a missing or mismatched
    /// redirect URI.
    #[must_use]
    pub fn redirect_mismatch(message: impl Into<String>) -> Self {
        Self::UnauthorizedClient {
            message: message.into(),
            category: ErrorCategory::Request,
        }
    }

    /// Creates a new `InvalidScope` error.
    #[must_use]
    pub fn invalid_scope(message: impl Into<String>) -> Self {
        Self::InvalidScope {
            message: message.into(),
        }
    }

    /// Creates a new `AccessDenied` error.
    #[must_use]
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied {
            message: message.into(),
        }
    }

    /// Creates a new `Storage` error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a new `Configuration` error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the human-readable message without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidRequest { message }
            | Self::InvalidClient { message, .. }
            | Self::UnauthorizedClient { message, .. }
            | Self::InvalidScope { message }
            | Self::AccessDenied { message }
            | Self::Storage { message }
            | Self::Configuration { message }
            | Self::Internal { message } => message,
        }
    }

    /// Returns the OAuth 2.0 error code for this error.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidRequest { .. } => ErrorCode::InvalidRequest,
            Self::InvalidClient { .. } => ErrorCode::InvalidClient,
            Self::UnauthorizedClient { .. } => ErrorCode::UnauthorizedClient,
            Self::InvalidScope { .. } => ErrorCode::InvalidScope,
            Self::AccessDenied { .. } => ErrorCode::AccessDenied,
            Self::Storage { .. } | Self::Configuration { .. } | Self::Internal { .. } => {
                ErrorCode::ServerError
            }
        }
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidClient { category, .. } | Self::UnauthorizedClient { category, .. } => {
                *category
            }
            Self::InvalidRequest { .. } | Self::InvalidScope { .. } | Self::AccessDenied { .. } => {
                ErrorCategory::Request
            }
            Self::Storage { .. } | Self::Configuration { .. } | Self::Internal { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    /// Returns `true` if the system, not the requester, is at fault.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.category() == ErrorCategory::Internal
    }

    /// Returns `true` if the caller may retry the same request.
    ///
    /// Only internal faults are retryable; every requester-side error will
    /// fail the same way again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.is_server_error()
    }
}

/// OAuth 2.0 error codes produced by the validation core.
///
/// Each code is surfaced verbatim to the HTTP layer, which maps it onto the
/// standard redirect or response-body format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is missing a required parameter, includes an invalid
    /// parameter value, or is otherwise malformed.
    InvalidRequest,

    /// The client is not authorized to use this flow or redirect URI.
    UnauthorizedClient,

    /// The requested scope is invalid, unknown, or malformed.
    InvalidScope,

    /// Client authentication failed.
    InvalidClient,

    /// The resource owner or authorization server denied the request.
    AccessDenied,

    /// The server encountered an unexpected condition.
    ServerError,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::InvalidScope => "invalid_scope",
            Self::InvalidClient => "invalid_client",
            Self::AccessDenied => "access_denied",
            Self::ServerError => "server_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error taxonomy used for logging and retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unknown client, disabled client, unsupported flow.
    Configuration,
    /// Missing or mismatched redirect URI, disallowed scope.
    Request,
    /// Bad or expired secret.
    Credential,
    /// Collaborator unavailable, hashing failure.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Request => write!(f, "request"),
            Self::Credential => write!(f, "credential"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::invalid_client("client not found");
        assert_eq!(err.to_string(), "Invalid client: client not found");

        let err = AuthError::unauthorized_client("flow not allowed");
        assert_eq!(err.to_string(), "Unauthorized client: flow not allowed");

        let err = AuthError::storage("database down");
        assert_eq!(err.to_string(), "Storage error: database down");
    }

    #[test]
    fn test_error_message() {
        let err = AuthError::invalid_scope("Scope 'admin' is not allowed");
        assert_eq!(err.message(), "Scope 'admin' is not allowed");
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            AuthError::invalid_request("x").error_code(),
            ErrorCode::InvalidRequest
        );
        assert_eq!(
            AuthError::invalid_client("x").error_code(),
            ErrorCode::InvalidClient
        );
        assert_eq!(
            AuthError::unauthorized_client("x").error_code(),
            ErrorCode::UnauthorizedClient
        );
        assert_eq!(
            AuthError::invalid_scope("x").error_code(),
            ErrorCode::InvalidScope
        );
        assert_eq!(
            AuthError::access_denied("x").error_code(),
            ErrorCode::AccessDenied
        );
        assert_eq!(AuthError::storage("x").error_code(), ErrorCode::ServerError);
        assert_eq!(
            AuthError::configuration("x").error_code(),
            ErrorCode::ServerError
        );
        assert_eq!(AuthError::internal("x").error_code(), ErrorCode::ServerError);
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            AuthError::invalid_client("x").category(),
            ErrorCategory::Credential
        );
        assert_eq!(
            AuthError::unknown_client("x").category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            AuthError::unauthorized_client("x").category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            AuthError::redirect_mismatch("x").category(),
            ErrorCategory::Request
        );
        assert_eq!(
            AuthError::invalid_scope("x").category(),
            ErrorCategory::Request
        );
        assert_eq!(AuthError::internal("x").category(), ErrorCategory::Internal);
    }

    #[test]
    fn test_category_does_not_change_error_code() {
        assert_eq!(
            AuthError::unknown_client("x").error_code(),
            ErrorCode::InvalidClient
        );
        assert_eq!(
            AuthError::redirect_mismatch("x").error_code(),
            ErrorCode::UnauthorizedClient
        );
        assert_eq!(
            AuthError::redirect_mismatch("x").to_string(),
            "Unauthorized client: x"
        );
    }

    #[test]
    fn test_only_internal_faults_are_retryable() {
        assert!(AuthError::storage("down").is_retryable());
        assert!(AuthError::internal("hash").is_retryable());
        assert!(!AuthError::invalid_request("x").is_retryable());
        assert!(!AuthError::invalid_client("x").is_retryable());
        assert!(!AuthError::invalid_scope("x").is_retryable());
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::InvalidRequest.as_str(), "invalid_request");
        assert_eq!(ErrorCode::UnauthorizedClient.as_str(), "unauthorized_client");
        assert_eq!(ErrorCode::InvalidScope.as_str(), "invalid_scope");
        assert_eq!(ErrorCode::InvalidClient.as_str(), "invalid_client");
        assert_eq!(ErrorCode::AccessDenied.as_str(), "access_denied");
        assert_eq!(ErrorCode::ServerError.as_str(), "server_error");
    }

    #[test]
    fn test_error_code_serializes_as_snake_case() {
        let json = serde_json::to_string(&ErrorCode::UnauthorizedClient).unwrap();
        assert_eq!(json, r#""unauthorized_client""#);
        assert_eq!(ErrorCode::ServerError.to_string(), "server_error");
    }

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
        assert_eq!(ErrorCategory::Request.to_string(), "request");
        assert_eq!(ErrorCategory::Credential.to_string(), "credential");
        assert_eq!(ErrorCategory::Internal.to_string(), "internal");
    }
}
