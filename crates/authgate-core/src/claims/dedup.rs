//! Claim deduplication policy.

use std::collections::HashSet;

use crate::types::Claim;

/// Collapses claims with equal `(type, value)` to their first occurrence.
///
/// First-seen order is preserved. The operation is idempotent.
#[must_use]
pub fn dedup_claims(claims: Vec<Claim>) -> Vec<Claim> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(claims.len());
    claims
        .into_iter()
        .filter(|claim| seen.insert((claim.claim_type.clone(), claim.value.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::claim_value_types;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let claims = vec![
            Claim::new("role", "admin"),
            Claim::new("email", "bob@example.com"),
            Claim::new("role", "admin").with_issuer("other"),
            Claim::new("role", "user"),
        ];

        let deduped = dedup_claims(claims);
        assert_eq!(deduped.len(), 3);
        assert_eq!(deduped[0].key(), ("role", "admin"));
        assert!(deduped[0].issuer.is_none());
        assert_eq!(deduped[1].key(), ("email", "bob@example.com"));
        assert_eq!(deduped[2].key(), ("role", "user"));
    }

    #[test]
    fn test_dedup_ignores_value_type() {
        let claims = vec![Claim::integer("age", 42), Claim::new("age", "42")];
        let deduped = dedup_claims(claims);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].value_type, claim_value_types::INTEGER);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let claims = vec![
            Claim::new("a", "1"),
            Claim::new("a", "1"),
            Claim::new("b", "1"),
        ];
        let once = dedup_claims(claims);
        let twice = dedup_claims(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_type_and_value_are_not_conflated() {
        // ("ab", "c") and ("a", "bc") must stay distinct.
        let claims = vec![Claim::new("ab", "c"), Claim::new("a", "bc")];
        assert_eq!(dedup_claims(claims).len(), 2);
    }
}
