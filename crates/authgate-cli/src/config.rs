//! Registry loading.
//!
//! The registry is a TOML file listing clients and scopes, plus an optional
//! `[validator]` section. Environment variables prefixed with `AUTHGATE__`
//! override file values, e.g. `AUTHGATE__VALIDATOR__MAX_SCOPE_COUNT=8`.
//!
//! ```toml
//! [validator]
//! secret_hash_algorithm = "sha512"
//!
//! [[clients]]
//! client_id = "code_client"
//! flow = "authorization_code"
//! redirect_uris = ["https://code_client/callback"]
//! allowed_scopes = ["openid"]
//!
//! [[clients.client_secrets]]
//! value = "<base64 digest>"
//!
//! [[scopes]]
//! name = "openid"
//! type = "identity"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use authgate_core::{Client, InMemoryClientStore, Scope, ValidatorConfig};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Registry file used when `--registry` is not given.
pub const DEFAULT_REGISTRY_PATH: &str = "authgate.toml";

/// Client and scope registry with validator settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub validator: ValidatorConfig,
    pub clients: Vec<Client>,
    pub scopes: Vec<Scope>,
}

impl RegistryConfig {
    /// Checks the validator settings and every client registration.
    pub fn validate(&self) -> Result<()> {
        self.validator
            .validate()
            .context("invalid [validator] section")?;

        let mut ids = HashSet::new();
        for client in &self.clients {
            client
                .validate()
                .with_context(|| format!("invalid client '{}'", client.client_id))?;
            if !ids.insert(client.client_id.as_str()) {
                bail!("duplicate client_id '{}'", client.client_id);
            }
        }

        let mut names = HashSet::new();
        for scope in &self.scopes {
            if scope.name.is_empty() || scope.name.contains(char::is_whitespace) {
                bail!("invalid scope name '{}'", scope.name);
            }
            if !names.insert(scope.name.as_str()) {
                bail!("duplicate scope '{}'", scope.name);
            }
        }

        Ok(())
    }

    /// Builds the in-memory store the validators read from.
    pub fn store(&self) -> InMemoryClientStore {
        InMemoryClientStore::new(self.clients.iter().cloned(), self.scopes.clone())
    }
}

/// Loads and validates the registry.
///
/// An explicitly given path must exist; the default path is optional, in
/// which case the registry is empty apart from environment overrides.
pub fn load_registry(path: Option<&Path>) -> Result<RegistryConfig> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_REGISTRY_PATH), false),
    };

    if required && !path.exists() {
        bail!("registry file not found: {}", path.display());
    }

    let cfg = Config::builder()
        .add_source(
            File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(required),
        )
        .add_source(
            Environment::with_prefix("AUTHGATE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("failed to read registry {}", path.display()))?;

    let registry: RegistryConfig = cfg
        .try_deserialize()
        .with_context(|| format!("failed to parse registry {}", path.display()))?;

    registry.validate()?;

    tracing::debug!(
        path = %path.display(),
        clients = registry.clients.len(),
        scopes = registry.scopes.len(),
        "Registry loaded"
    );

    Ok(registry)
}
