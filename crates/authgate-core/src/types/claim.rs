//! Claim type.

use serde::{Deserialize, Serialize};

use crate::constants::claim_value_types;

/// A single statement about a subject.
///
/// Two claims are the *same claim* for deduplication purposes when their
/// `claim_type` and `value` are equal; `value_type` and `issuer` are ignored.
/// `PartialEq` on this struct compares every field; use [`Claim::key`] when
/// the dedup identity is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type, e.g. `sub` or `email`.
    #[serde(rename = "type")]
    pub claim_type: String,

    /// Claim value as a string.
    pub value: String,

    /// Value type tag (XML-schema URI).
    #[serde(default = "default_value_type")]
    pub value_type: String,

    /// Issuer of the claim, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

fn default_value_type() -> String {
    claim_value_types::STRING.to_string()
}

impl Claim {
    /// Creates a string-valued claim.
    #[must_use]
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: default_value_type(),
            issuer: None,
        }
    }

    /// Creates an integer-valued claim.
    #[must_use]
    pub fn integer(claim_type: impl Into<String>, value: i64) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.to_string(),
            value_type: claim_value_types::INTEGER.to_string(),
            issuer: None,
        }
    }

    /// Sets the issuer.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Returns the `(type, value)` pair that identifies this claim.
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (&self.claim_type, &self.value)
    }

    /// Returns `true` if both claims carry the same type and value.
    #[must_use]
    pub fn is_same_claim(&self, other: &Claim) -> bool {
        self.key() == other.key()
    }
}
