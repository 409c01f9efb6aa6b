use anyhow::{Result, bail};
use authgate_core::{ClientSecretValidator, authenticate_client, parse_basic_auth};
use serde::Serialize;

use crate::cli::AuthenticateArgs;
use crate::commands::CommandStatus;
use crate::config::RegistryConfig;
use crate::output::{print_json, print_rejected, print_success};

#[derive(Debug, Serialize)]
struct AuthenticationReport {
    authenticated: bool,
    client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_description: Option<String>,
}

pub async fn authenticate(
    registry: &RegistryConfig,
    args: &AuthenticateArgs,
) -> Result<CommandStatus> {
    let (client_id, secret) = credentials(args)?;

    let store = registry.store();
    let validator = ClientSecretValidator::new(registry.validator.secret_hash_algorithm.hasher());

    let report = match authenticate_client(&store, &client_id, &secret, &validator).await {
        Ok(client) => AuthenticationReport {
            authenticated: true,
            client_id: client.client_id,
            error: None,
            error_description: None,
        },
        Err(e) => AuthenticationReport {
            authenticated: false,
            client_id,
            error: Some(e.error_code().to_string()),
            error_description: (!e.is_server_error()).then(|| e.message().to_string()),
        },
    };
    print_json(&report)?;

    if report.authenticated {
        print_success(&format!("Client '{}' authenticated", report.client_id));
        Ok(CommandStatus::Accepted)
    } else {
        print_rejected("Client authentication failed");
        Ok(CommandStatus::Rejected)
    }
}

fn credentials(args: &AuthenticateArgs) -> Result<(String, String)> {
    if let Some(header) = &args.authorization {
        return match parse_basic_auth(header) {
            Some(pair) => Ok(pair),
            None => bail!("malformed Basic authorization value"),
        };
    }

    match (&args.client_id, &args.secret) {
        (Some(id), Some(secret)) => Ok((id.clone(), secret.clone())),
        _ => bail!("either --client-id with --secret, or --authorization is required"),
    }
}
