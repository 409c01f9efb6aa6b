use anyhow::Result;
use authgate_core::GrantValidationResult;
use authgate_core::clock::{Clock, SystemClock};

use crate::cli::AssertArgs;
use crate::commands::CommandStatus;
use crate::config::RegistryConfig;
use crate::output::{print_json, print_rejected};

pub fn assert(registry: &RegistryConfig, args: &AssertArgs) -> Result<CommandStatus> {
    let result = build_assertion(registry, args, &SystemClock);
    print_json(&result)?;

    if let GrantValidationResult::Error { error, .. } = &result {
        print_rejected(&format!("Assertion not built: {error}"));
        return Ok(CommandStatus::Rejected);
    }
    Ok(CommandStatus::Accepted)
}

fn build_assertion(
    registry: &RegistryConfig,
    args: &AssertArgs,
    clock: &dyn Clock,
) -> GrantValidationResult {
    let mut builder = registry
        .validator
        .assertion_builder(args.subject.as_str(), args.method.as_str())
        .with_claims(args.claims.iter().cloned());
    if let Some(idp) = &args.idp {
        builder = builder.with_identity_provider(idp.as_str());
    }

    GrantValidationResult::from_builder(builder, clock)
}
