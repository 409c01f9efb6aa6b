//! Protocol constants: claim type names and the reserved claim type set.
//!
//! The reserved set is an externally visible security contract. Any claim
//! whose type appears here is owned by the identity/token protocol and can
//! never be supplied by an extension grant. Bump
//! [`RESERVED_PROTOCOL_CLAIM_TYPES_VERSION`] whenever the list changes so
//! token-issuance collaborators can detect drift.

/// Identity provider tag used when the subject was authenticated locally.
pub const BUILT_IN_IDENTITY_PROVIDER: &str = "local";

/// Standard claim type names.
pub mod claim_types {
    pub const SUBJECT: &str = "sub";
    pub const ISSUER: &str = "iss";
    pub const AUDIENCE: &str = "aud";
    pub const EXPIRATION: &str = "exp";
    pub const NOT_BEFORE: &str = "nbf";
    pub const ISSUED_AT: &str = "iat";
    pub const AUTHENTICATION_TIME: &str = "auth_time";
    pub const AUTHENTICATION_METHOD: &str = "amr";
    pub const AUTHENTICATION_CONTEXT_CLASS_REFERENCE: &str = "acr";
    pub const IDENTITY_PROVIDER: &str = "idp";
    pub const NONCE: &str = "nonce";
    pub const ACCESS_TOKEN_HASH: &str = "at_hash";
    pub const AUTHORIZATION_CODE_HASH: &str = "c_hash";
    pub const STATE_HASH: &str = "s_hash";
    pub const AUTHORIZED_PARTY: &str = "azp";
    pub const JWT_ID: &str = "jti";
    pub const SESSION_ID: &str = "sid";
    pub const CLIENT_ID: &str = "client_id";
    pub const SCOPE: &str = "scope";
}

/// Claim value type tags, as emitted by XML-schema aware token formats.
pub mod claim_value_types {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

/// Version of [`RESERVED_PROTOCOL_CLAIM_TYPES`].
pub const RESERVED_PROTOCOL_CLAIM_TYPES_VERSION: u32 = 1;

/// Claim types owned by the protocol. Caller-supplied claims of these types
/// are dropped before an identity assertion is built.
pub const RESERVED_PROTOCOL_CLAIM_TYPES: &[&str] = &[
    claim_types::SUBJECT,
    claim_types::ISSUER,
    claim_types::AUDIENCE,
    claim_types::EXPIRATION,
    claim_types::NOT_BEFORE,
    claim_types::ISSUED_AT,
    claim_types::AUTHENTICATION_TIME,
    claim_types::AUTHENTICATION_METHOD,
    claim_types::AUTHENTICATION_CONTEXT_CLASS_REFERENCE,
    claim_types::IDENTITY_PROVIDER,
    claim_types::NONCE,
    claim_types::ACCESS_TOKEN_HASH,
    claim_types::AUTHORIZATION_CODE_HASH,
    claim_types::STATE_HASH,
    claim_types::AUTHORIZED_PARTY,
    claim_types::JWT_ID,
    claim_types::SESSION_ID,
];

/// Returns `true` if `claim_type` is owned by the protocol.
///
/// Matching is exact and case-sensitive, like JWT claim names.
#[must_use]
pub fn is_reserved_protocol_claim_type(claim_type: &str) -> bool {
    RESERVED_PROTOCOL_CLAIM_TYPES.contains(&claim_type)
}

/// The scope that marks an OpenID Connect request.
pub const OPENID_SCOPE: &str = "openid";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_protocol_claims_are_reserved() {
        for claim_type in [
            "sub",
            "iss",
            "aud",
            "exp",
            "nbf",
            "iat",
            "auth_time",
            "amr",
            "idp",
            "nonce",
        ] {
            assert!(
                is_reserved_protocol_claim_type(claim_type),
                "{claim_type} should be reserved"
            );
        }
    }

    #[test]
    fn test_profile_claims_are_not_reserved() {
        assert!(!is_reserved_protocol_claim_type("name"));
        assert!(!is_reserved_protocol_claim_type("email"));
        assert!(!is_reserved_protocol_claim_type("role"));
    }

    #[test]
    fn test_reserved_match_is_case_sensitive() {
        assert!(!is_reserved_protocol_claim_type("SUB"));
        assert!(!is_reserved_protocol_claim_type("Sub"));
    }

    #[test]
    fn test_reserved_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for claim_type in RESERVED_PROTOCOL_CLAIM_TYPES {
            assert!(seen.insert(*claim_type), "duplicate {claim_type}");
        }
    }
}
