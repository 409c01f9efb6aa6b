//! Protocol claim filter.

use crate::constants::is_reserved_protocol_claim_type;
use crate::types::Claim;

/// Drops every claim whose type is a reserved protocol claim type.
///
/// Order of the remaining claims is preserved.
pub fn filter_protocol_claims<I>(claims: I) -> Vec<Claim>
where
    I: IntoIterator<Item = Claim>,
{
    claims
        .into_iter()
        .filter(|claim| {
            let reserved = is_reserved_protocol_claim_type(&claim.claim_type);
            if reserved {
                tracing::debug!(
                    claim_type = %claim.claim_type,
                    "Dropping caller-supplied protocol claim"
                );
            }
            !reserved
        })
        .collect()
}
