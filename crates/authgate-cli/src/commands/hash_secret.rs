use anyhow::{Context, Result};
use authgate_core::HashAlgorithm;
use authgate_core::oauth::SecretHasher;

use crate::cli::HashSecretArgs;
use crate::config::RegistryConfig;

pub fn hash_secret(registry: &RegistryConfig, args: &HashSecretArgs) -> Result<()> {
    let digest = secret_digest(registry, args)?;
    println!("{digest}");
    Ok(())
}

/// Digests the secret with the `--algorithm` override or the registry setting.
fn secret_digest(registry: &RegistryConfig, args: &HashSecretArgs) -> Result<String> {
    let algorithm = args
        .algorithm
        .map(HashAlgorithm::from)
        .unwrap_or(registry.validator.secret_hash_algorithm);

    let digest = algorithm
        .hasher()
        .digest(&args.secret)
        .context("failed to hash secret")?;

    tracing::debug!(algorithm = %algorithm, "Secret hashed");
    Ok(digest)
}
