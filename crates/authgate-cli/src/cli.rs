use std::path::PathBuf;

use authgate_core::{Claim, HashAlgorithm};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "authgate")]
#[command(about = "Authgate CLI: validate OAuth 2.0 / OpenID Connect requests against a client registry")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Client/scope registry file (TOML)
    #[arg(short, long, global = true, env = "AUTHGATE_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an authorize request
    Authorize(AuthorizeArgs),
    /// Authenticate a client with its secret
    Authenticate(AuthenticateArgs),
    /// Build an identity assertion
    Assert(AssertArgs),
    /// Print the digest of a secret for the registry
    HashSecret(HashSecretArgs),
}

#[derive(clap::Args)]
pub struct AuthorizeArgs {
    /// Client identifier
    #[arg(long)]
    pub client_id: String,
    /// Response type (e.g. "code" or "code id_token")
    #[arg(long)]
    pub response_type: String,
    /// Space-separated scopes
    #[arg(long)]
    pub scope: Option<String>,
    /// Redirect URI, compared exactly against the registration
    #[arg(long)]
    pub redirect_uri: Option<String>,
    /// Opaque state echoed back
    #[arg(long)]
    pub state: Option<String>,
    /// Nonce echoed back
    #[arg(long)]
    pub nonce: Option<String>,
}

#[derive(clap::Args)]
pub struct AuthenticateArgs {
    /// Client identifier
    #[arg(long, requires = "secret")]
    pub client_id: Option<String>,
    /// Client secret (plaintext)
    #[arg(long, requires = "client_id")]
    pub secret: Option<String>,
    /// HTTP Basic authorization value, e.g. "Basic Y2xpZW50OnNlY3JldA=="
    #[arg(long, conflicts_with_all = ["client_id", "secret"])]
    pub authorization: Option<String>,
}

#[derive(clap::Args)]
pub struct AssertArgs {
    /// Subject identifier
    #[arg(long)]
    pub subject: String,
    /// Authentication method (e.g. the grant type name)
    #[arg(long)]
    pub method: String,
    /// Identity provider tag (defaults to the registry's built-in provider)
    #[arg(long)]
    pub idp: Option<String>,
    /// Extra claim as type=value, repeatable
    #[arg(long = "claim", value_parser = parse_claim)]
    pub claims: Vec<Claim>,
}

#[derive(clap::Args)]
pub struct HashSecretArgs {
    /// Plaintext secret
    pub secret: String,
    /// Digest algorithm (defaults to the registry setting)
    #[arg(long)]
    pub algorithm: Option<AlgorithmArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AlgorithmArg {
    Sha256,
    Sha512,
}

impl From<AlgorithmArg> for HashAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha256 => HashAlgorithm::Sha256,
            AlgorithmArg::Sha512 => HashAlgorithm::Sha512,
        }
    }
}

/// Parses `type=value`. The value may itself contain `=`.
fn parse_claim(s: &str) -> Result<Claim, String> {
    let (claim_type, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid claim '{s}': expected type=value"))?;
    if claim_type.is_empty() {
        return Err(format!("invalid claim '{s}': empty claim type"));
    }
    Ok(Claim::new(claim_type, value))
}
