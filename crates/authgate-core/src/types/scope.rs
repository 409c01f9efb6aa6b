//! Scope registration type.

use serde::{Deserialize, Serialize};

/// Whether a scope grants identity data or API access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeType {
    /// Identity scope (e.g. `openid`, `profile`), feeds the identity token.
    Identity,
    /// Resource scope, feeds the access token.
    Resource,
}

/// A registered scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scope {
    /// Scope name as it appears in the `scope` parameter.
    pub name: String,

    /// Identity or resource scope.
    #[serde(rename = "type")]
    pub scope_type: ScopeType,

    /// Disabled scopes are treated as unknown.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Scope {
    /// Creates an enabled identity scope.
    #[must_use]
    pub fn identity(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope_type: ScopeType::Identity,
            enabled: true,
        }
    }

    /// Creates an enabled resource scope.
    #[must_use]
    pub fn resource(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope_type: ScopeType::Resource,
            enabled: true,
        }
    }

    /// Returns `true` for identity scopes.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scope_type == ScopeType::Identity
    }
}
