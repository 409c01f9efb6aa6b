//! Storage collaborators.
//!
//! - [`ClientStore`] - read-only client and scope registrations
//! - [`InMemoryClientStore`] - a registry held in memory, used by the CLI
//!   and in tests

pub mod client;
pub mod memory;

pub use client::ClientStore;
pub use memory::InMemoryClientStore;
