//! Identity assertions for completed grants.
//!
//! - [`assertion`] - The assertion type and its builder
//! - [`grant`] - Tri-state result returned by extension grant validators

pub mod assertion;
pub mod grant;

pub use assertion::{IdentityAssertion, IdentityAssertionBuilder};
pub use grant::GrantValidationResult;
