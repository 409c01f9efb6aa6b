//! Result of extension (custom) grant validation.

use serde::Serialize;

use crate::clock::Clock;
use crate::identity::assertion::{IdentityAssertion, IdentityAssertionBuilder};
use crate::types::Claim;

/// Outcome of a custom grant validator.
///
/// `Pending` is the neutral starting state used by validators that fill the
/// result in later; it is neither an error nor a success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GrantValidationResult {
    /// Not yet determined.
    #[default]
    Pending,

    /// The grant was rejected.
    Error {
        /// Error string reported to the token endpoint caller.
        error: String,
        /// Optional human-readable description.
        #[serde(skip_serializing_if = "Option::is_none")]
        error_description: Option<String>,
    },

    /// The grant was accepted for the asserted identity.
    Success(IdentityAssertion),
}

impl GrantValidationResult {
    /// Creates an error result carrying `error`. No subject is required.
    #[must_use]
    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
            error_description: None,
        }
    }

    /// Creates an error result with a description.
    #[must_use]
    pub fn error_with_description(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
            error_description: Some(description.into()),
        }
    }

    /// Builds a success result for `subject`.
    ///
    /// Extra `claims` pass through the protocol filter and deduplication;
    /// `identity_provider` defaults to the built-in provider. If the
    /// assertion cannot be built (empty subject or method) an error result
    /// is returned instead.
    #[must_use]
    pub fn success(
        subject: impl Into<String>,
        authentication_method: impl Into<String>,
        claims: Option<Vec<Claim>>,
        identity_provider: Option<&str>,
        clock: &dyn Clock,
    ) -> Self {
        let mut builder = IdentityAssertionBuilder::new(subject, authentication_method);
        if let Some(claims) = claims {
            builder = builder.with_claims(claims);
        }
        if let Some(idp) = identity_provider {
            builder = builder.with_identity_provider(idp);
        }
        Self::from_builder(builder, clock)
    }

    /// Builds a success result from a prepared builder, or an error result
    /// if the assertion cannot be built.
    #[must_use]
    pub fn from_builder(builder: IdentityAssertionBuilder, clock: &dyn Clock) -> Self {
        match builder.build(clock) {
            Ok(assertion) => Self::Success(assertion),
            Err(e) => {
                tracing::debug!(error = %e, "Custom grant produced an unusable identity");
                Self::error_with_description(e.error_code().as_str(), e.message())
            }
        }
    }

    /// Returns `true` for the error state.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Returns `true` for the neutral state.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the assertion on success.
    #[must_use]
    pub fn assertion(&self) -> Option<&IdentityAssertion> {
        match self {
            Self::Success(assertion) => Some(assertion),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_default_is_pending() {
        let result = GrantValidationResult::default();
        assert!(result.is_pending());
        assert!(!result.is_error());
        assert!(result.assertion().is_none());
    }

    #[test]
    fn test_error_constructor() {
        let result = GrantValidationResult::error("invalid_grant");
        assert!(result.is_error());
        assert!(result.assertion().is_none());
        assert_eq!(
            result,
            GrantValidationResult::Error {
                error: "invalid_grant".to_string(),
                error_description: None,
            }
        );
    }

    #[test]
    fn test_success_constructor() {
        let clock = FixedClock::from_epoch_secs(1_700_000_000);
        let result = GrantValidationResult::success(
            "bob",
            "custom",
            Some(vec![Claim::new("sub", "mallory")]),
            None,
            &clock,
        );
        assert!(!result.is_error());
        let assertion = result.assertion().unwrap();
        assert_eq!(assertion.subject(), "bob");
        assert_eq!(assertion.claims().len(), 4);
    }

    #[test]
    fn test_success_with_empty_subject_becomes_error() {
        let clock = FixedClock::from_epoch_secs(0);
        let result = GrantValidationResult::success("", "custom", None, None, &clock);
        assert!(result.is_error());
    }

    #[test]
    fn test_from_builder_keeps_default_identity_provider() {
        let clock = FixedClock::from_epoch_secs(1_700_000_000);
        let builder = IdentityAssertionBuilder::new("bob", "custom")
            .with_default_identity_provider("corp")
            .with_claims(vec![Claim::new("idp", "evil")]);
        let result = GrantValidationResult::from_builder(builder, &clock);
        let assertion = result.assertion().unwrap();
        assert_eq!(assertion.identity_provider(), "corp");
        assert_eq!(assertion.claims_of_type("idp").count(), 1);

        let builder = IdentityAssertionBuilder::new("bob", "");
        assert!(GrantValidationResult::from_builder(builder, &clock).is_error());
    }

    #[test]
    fn test_serialize_states() {
        let json = serde_json::to_string(&GrantValidationResult::Pending).unwrap();
        assert_eq!(json, r#"{"status":"pending"}"#);

        let json = serde_json::to_string(&GrantValidationResult::error("invalid_grant")).unwrap();
        assert_eq!(json, r#"{"status":"error","error":"invalid_grant"}"#);

        let clock = FixedClock::from_epoch_secs(1);
        let result = GrantValidationResult::success("bob", "custom", None, Some("google"), &clock);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["subject"], "bob");
        assert_eq!(json["identity_provider"], "google");
        assert_eq!(json["auth_time"], 1);
    }
}
