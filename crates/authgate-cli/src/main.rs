mod cli;
mod commands;
mod config;
mod observability;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::CommandStatus;
use output::print_error;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            print_error(&format!("{e:#}"));
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<CommandStatus> {
    let cli = Cli::parse();
    observability::init_tracing_with_level(&cli.log_level);

    let registry = config::load_registry(cli.registry.as_deref())?;

    let status = match &cli.command {
        Commands::Authorize(args) => commands::authorize::authorize(&registry, args).await?,
        Commands::Authenticate(args) => {
            commands::authenticate::authenticate(&registry, args).await?
        }
        Commands::Assert(args) => commands::assert::assert(&registry, args)?,
        Commands::HashSecret(args) => {
            commands::hash_secret::hash_secret(&registry, args)?;
            CommandStatus::Accepted
        }
    };

    Ok(status)
}
