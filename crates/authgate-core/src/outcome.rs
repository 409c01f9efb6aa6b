//! Structured accept/reject outcome of a validation pass.
//!
//! A [`ValidationOutcome`] is either an [`ValidationError`] carrying an OAuth
//! 2.0 error code, or a success carrying the validated context. The two are
//! mutually exclusive by construction.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{AuthError, ErrorCode};

/// A rejected request: OAuth 2.0 error code plus optional description.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    /// OAuth 2.0 error code.
    #[serde(rename = "error")]
    pub code: ErrorCode,

    /// Human-readable error description (optional).
    #[serde(rename = "error_description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error without description.
    #[must_use]
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            description: None,
        }
    }

    /// Creates a new validation error with description.
    #[must_use]
    pub fn with_description(code: ErrorCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: Some(description.into()),
        }
    }
}

impl From<AuthError> for ValidationError {
    fn from(err: AuthError) -> Self {
        let code = err.error_code();
        // Internal details never leave the core.
        let description = if err.is_server_error() {
            "The server encountered an unexpected condition".to_string()
        } else {
            err.message().to_string()
        };
        Self::with_description(code, description)
    }
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome<T> {
    /// The request was rejected.
    Error(ValidationError),
    /// The request was accepted with the given context.
    Success(T),
}

impl<T> ValidationOutcome<T> {
    /// Creates a rejection with the given code and description.
    #[must_use]
    pub fn error(code: ErrorCode, description: impl Into<String>) -> Self {
        Self::Error(ValidationError::with_description(code, description))
    }

    /// Returns `true` if the request was rejected.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the error code if the request was rejected.
    #[must_use]
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Error(err) => Some(err.code),
            Self::Success(_) => None,
        }
    }

    /// Returns the rejection, if any.
    #[must_use]
    pub fn as_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Error(err) => Some(err),
            Self::Success(_) => None,
        }
    }

    /// Returns the accepted context, if any.
    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Error(_) => None,
            Self::Success(ctx) => Some(ctx),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self {
            Self::Error(err) => Err(err),
            Self::Success(ctx) => Ok(ctx),
        }
    }
}

impl<T> From<AuthError> for ValidationOutcome<T> {
    fn from(err: AuthError) -> Self {
        Self::Error(err.into())
    }
}

impl<T> From<Result<T, AuthError>> for ValidationOutcome<T> {
    fn from(result: Result<T, AuthError>) -> Self {
        match result {
            Ok(ctx) => Self::Success(ctx),
            Err(err) => err.into(),
        }
    }
}

impl<T: Serialize> Serialize for ValidationOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Error(err) => err.serialize(serializer),
            Self::Success(ctx) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("success", ctx)?;
                map.end()
            }
        }
    }
}
