//! Client and scope store trait.
//!
//! The core only reads registrations. Persistence is the business of the
//! implementation behind this trait.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::{Client, Scope};

// =============================================================================
// Client Store Trait
// =============================================================================

/// Read-only access to client and scope registrations.
///
/// # Example
///
/// ```ignore
/// use authgate_core::storage::ClientStore;
///
/// async fn example(store: &dyn ClientStore) -> authgate_core::AuthResult<()> {
///     if let Some(client) = store.find_client("code_client").await? {
///         println!("Found client: {}", client.client_name);
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Finds a client by its OAuth `client_id`.
    ///
    /// Disabled clients are still returned; the caller decides how to treat
    /// them.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_client(&self, client_id: &str) -> AuthResult<Option<Client>>;

    /// Lists every registered scope, enabled or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn list_scopes(&self) -> AuthResult<Vec<Scope>>;
}
