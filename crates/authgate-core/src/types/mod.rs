//! Domain types shared across the validators.
//!
//! - [`Client`] - OAuth 2.0 client registration
//! - [`Scope`] - Identity or resource scope registration
//! - [`Claim`] - A statement about a subject

pub mod claim;
pub mod client;
pub mod scope;

pub use claim::Claim;
pub use client::{Client, ClientSecret, ClientValidationError, Flow};
pub use scope::{Scope, ScopeType};
