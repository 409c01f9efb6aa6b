//! In-memory client store.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::AuthResult;
use crate::storage::ClientStore;
use crate::types::{Client, Scope};

/// A [`ClientStore`] over a registry loaded once at start-up.
///
/// Holds no mutable state after construction. When two registrations share
/// a `client_id` the last one wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientStore {
    clients: HashMap<String, Client>,
    scopes: Vec<Scope>,
}

impl InMemoryClientStore {
    /// Creates a store from client and scope registrations.
    #[must_use]
    pub fn new(clients: impl IntoIterator<Item = Client>, scopes: Vec<Scope>) -> Self {
        let clients = clients
            .into_iter()
            .map(|client| (client.client_id.clone(), client))
            .collect();
        Self { clients, scopes }
    }

    /// Number of registered clients.
    #[must_use]
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn find_client(&self, client_id: &str) -> AuthResult<Option<Client>> {
        Ok(self.clients.get(client_id).cloned())
    }

    async fn list_scopes(&self) -> AuthResult<Vec<Scope>> {
        Ok(self.scopes.clone())
    }
}
