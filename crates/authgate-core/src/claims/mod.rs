//! Pure claim-set transforms applied when building identity assertions.
//!
//! - [`filter_protocol_claims`] strips caller-supplied claims whose type is
//!   owned by the protocol, so an extension grant cannot forge `sub`, `iss`
//!   or `auth_time`.
//! - [`dedup_claims`] collapses semantically duplicate claims.
//!
//! Filtering always runs before deduplication.

pub mod dedup;
pub mod filter;

pub use dedup::dedup_claims;
pub use filter::filter_protocol_claims;
