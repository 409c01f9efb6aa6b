//! Identity assertion and its builder.

use serde::Serialize;

use crate::AuthResult;
use crate::claims::{dedup_claims, filter_protocol_claims};
use crate::clock::Clock;
use crate::constants::{BUILT_IN_IDENTITY_PROVIDER, claim_types};
use crate::error::AuthError;
use crate::types::Claim;

/// A canonical, sanitized set of claims about an authenticated subject.
///
/// Always starts with the four mandatory claims `sub`, `amr`, `idp` and
/// `auth_time`, followed by the caller-supplied claims that survived the
/// protocol filter, deduplicated on `(type, value)`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityAssertion {
    subject: String,
    authentication_method: String,
    identity_provider: String,
    auth_time: i64,
    claims: Vec<Claim>,
}

impl IdentityAssertion {
    /// Subject identifier, unique within the identity provider's namespace.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// How the subject was authenticated (e.g. the grant type name).
    #[must_use]
    pub fn authentication_method(&self) -> &str {
        &self.authentication_method
    }

    /// Identity provider tag.
    #[must_use]
    pub fn identity_provider(&self) -> &str {
        &self.identity_provider
    }

    /// Authentication time in seconds since the Unix epoch.
    #[must_use]
    pub fn auth_time(&self) -> i64 {
        self.auth_time
    }

    /// All claims, mandatory ones first.
    #[must_use]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Returns the first claim of the given type.
    #[must_use]
    pub fn find_claim(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type == claim_type)
    }

    /// Returns every claim of the given type, in order.
    pub fn claims_of_type<'a>(&'a self, claim_type: &'a str) -> impl Iterator<Item = &'a Claim> {
        self.claims.iter().filter(move |c| c.claim_type == claim_type)
    }

    /// Consumes the assertion and returns its claims.
    #[must_use]
    pub fn into_claims(self) -> Vec<Claim> {
        self.claims
    }
}

/// Builds an [`IdentityAssertion`].
///
/// # Example
///
/// ```
/// use authgate_core::clock::FixedClock;
/// use authgate_core::identity::IdentityAssertionBuilder;
/// use authgate_core::types::Claim;
///
/// let clock = FixedClock::from_epoch_secs(1_700_000_000);
/// let assertion = IdentityAssertionBuilder::new("bob", "custom")
///     .with_claims(vec![Claim::new("sub", "mallory"), Claim::new("role", "attorney")])
///     .build(&clock)
///     .unwrap();
///
/// assert_eq!(assertion.subject(), "bob");
/// assert_eq!(assertion.identity_provider(), "local");
/// assert_eq!(assertion.claims_of_type("sub").count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct IdentityAssertionBuilder {
    subject: String,
    authentication_method: String,
    identity_provider: Option<String>,
    default_identity_provider: String,
    claims: Vec<Claim>,
}

impl IdentityAssertionBuilder {
    /// Starts an assertion for `subject` authenticated via `authentication_method`.
    #[must_use]
    pub fn new(subject: impl Into<String>, authentication_method: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            authentication_method: authentication_method.into(),
            identity_provider: None,
            default_identity_provider: BUILT_IN_IDENTITY_PROVIDER.to_string(),
            claims: Vec::new(),
        }
    }

    /// Appends caller-supplied claims. Reserved protocol claim types are
    /// dropped at build time.
    #[must_use]
    pub fn with_claims<I>(mut self, claims: I) -> Self
    where
        I: IntoIterator<Item = Claim>,
    {
        self.claims.extend(claims);
        self
    }

    /// Sets the identity provider tag. An empty tag means the default.
    #[must_use]
    pub fn with_identity_provider(mut self, identity_provider: impl Into<String>) -> Self {
        self.identity_provider = Some(identity_provider.into());
        self
    }

    /// Replaces the tag used when no identity provider is set.
    /// Starts as [`BUILT_IN_IDENTITY_PROVIDER`].
    #[must_use]
    pub fn with_default_identity_provider(mut self, identity_provider: impl Into<String>) -> Self {
        self.default_identity_provider = identity_provider.into();
        self
    }

    /// Builds the assertion, stamping `auth_time` from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the subject or authentication method is empty.
    pub fn build(self, clock: &dyn Clock) -> AuthResult<IdentityAssertion> {
        if self.subject.is_empty() {
            return Err(AuthError::invalid_request("Subject is required"));
        }
        if self.authentication_method.is_empty() {
            return Err(AuthError::invalid_request(
                "Authentication method is required",
            ));
        }

        let identity_provider = self
            .identity_provider
            .filter(|idp| !idp.is_empty())
            .unwrap_or(self.default_identity_provider);
        let auth_time = clock.now_epoch_secs();

        let mut claims = vec![
            Claim::new(claim_types::SUBJECT, self.subject.as_str()),
            Claim::new(
                claim_types::AUTHENTICATION_METHOD,
                self.authentication_method.as_str(),
            ),
            Claim::new(claim_types::IDENTITY_PROVIDER, identity_provider.as_str()),
            Claim::integer(claim_types::AUTHENTICATION_TIME, auth_time),
        ];
        claims.extend(filter_protocol_claims(self.claims));
        let claims = dedup_claims(claims);

        Ok(IdentityAssertion {
            subject: self.subject,
            authentication_method: self.authentication_method,
            identity_provider,
            auth_time,
            claims,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::constants::claim_value_types;

    const NOW: i64 = 1_700_000_000;

    fn clock() -> FixedClock {
        FixedClock::from_epoch_secs(NOW)
    }

    #[test]
    fn test_mandatory_claims_only() {
        let assertion = IdentityAssertionBuilder::new("bob", "password")
            .build(&clock())
            .unwrap();

        let keys: Vec<(&str, &str)> = assertion.claims().iter().map(Claim::key).collect();
        assert_eq!(
            keys,
            vec![
                ("sub", "bob"),
                ("amr", "password"),
                ("idp", "local"),
                ("auth_time", "1700000000"),
            ]
        );
        assert_eq!(assertion.auth_time(), NOW);
        assert_eq!(
            assertion.find_claim("auth_time").unwrap().value_type,
            claim_value_types::INTEGER
        );
    }

    #[test]
    fn test_custom_identity_provider() {
        let assertion = IdentityAssertionBuilder::new("bob", "external")
            .with_identity_provider("google")
            .build(&clock())
            .unwrap();
        assert_eq!(assertion.identity_provider(), "google");
        assert_eq!(assertion.find_claim("idp").unwrap().value, "google");
    }

    #[test]
    fn test_empty_identity_provider_falls_back_to_local() {
        let assertion = IdentityAssertionBuilder::new("bob", "custom")
            .with_identity_provider("")
            .build(&clock())
            .unwrap();
        assert_eq!(assertion.identity_provider(), "local");
    }

    #[test]
    fn test_forged_protocol_claims_are_dropped() {
        let assertion = IdentityAssertionBuilder::new("bob", "custom")
            .with_claims(vec![
                Claim::new("sub", "mallory"),
                Claim::new("idp", "evil"),
                Claim::integer("auth_time", 0),
                Claim::new("iss", "https://evil.example.com"),
                Claim::new("role", "attorney"),
            ])
            .build(&clock())
            .unwrap();

        assert_eq!(assertion.claims().len(), 5);
        assert_eq!(assertion.claims_of_type("sub").count(), 1);
        assert_eq!(assertion.find_claim("sub").unwrap().value, "bob");
        assert_eq!(assertion.find_claim("idp").unwrap().value, "local");
        assert_eq!(assertion.find_claim("auth_time").unwrap().value, "1700000000");
        assert!(assertion.find_claim("iss").is_none());
        assert_eq!(assertion.find_claim("role").unwrap().value, "attorney");
    }

    #[test]
    fn test_extra_claims_are_deduplicated() {
        let assertion = IdentityAssertionBuilder::new("bob", "custom")
            .with_claims(vec![
                Claim::new("role", "a"),
                Claim::new("role", "a"),
                Claim::new("role", "b"),
            ])
            .build(&clock())
            .unwrap();
        let roles: Vec<&str> = assertion
            .claims_of_type("role")
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(roles, vec!["a", "b"]);
    }

    #[test]
    fn test_same_inputs_same_clock_same_assertion() {
        let build = || {
            IdentityAssertionBuilder::new("bob", "custom")
                .with_claims(vec![Claim::new("role", "a"), Claim::new("sub", "x")])
                .build(&clock())
                .unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_empty_subject_rejected() {
        let err = IdentityAssertionBuilder::new("", "custom")
            .build(&clock())
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidRequest { .. }));
    }

    #[test]
    fn test_empty_method_rejected() {
        let err = IdentityAssertionBuilder::new("bob", "")
            .build(&clock())
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidRequest { .. }));
    }
}
