use std::sync::Arc;

use anyhow::Result;
use authgate_core::{AuthorizeRequest, AuthorizeRequestValidator, ValidationOutcome};

use crate::cli::AuthorizeArgs;
use crate::commands::CommandStatus;
use crate::config::RegistryConfig;
use crate::output::{print_json, print_rejected, print_success};

pub async fn authorize(registry: &RegistryConfig, args: &AuthorizeArgs) -> Result<CommandStatus> {
    let validator =
        AuthorizeRequestValidator::new(Arc::new(registry.store()), registry.validator.clone());

    let outcome = validator.validate(&request_from_args(args)).await;
    print_json(&outcome)?;

    Ok(match &outcome {
        ValidationOutcome::Success(validated) => {
            print_success(&format!(
                "Accepted: redirect to {}",
                validated.redirect_uri
            ));
            CommandStatus::Accepted
        }
        ValidationOutcome::Error(error) => {
            print_rejected(&format!("Rejected: {}", error.code));
            CommandStatus::Rejected
        }
    })
}

fn request_from_args(args: &AuthorizeArgs) -> AuthorizeRequest {
    AuthorizeRequest {
        client_id: Some(args.client_id.clone()),
        response_type: Some(args.response_type.clone()),
        scope: args.scope.clone(),
        redirect_uri: args.redirect_uri.clone(),
        state: args.state.clone(),
        nonce: args.nonce.clone(),
    }
}
