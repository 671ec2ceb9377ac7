//! nextmeetup CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use nextmeetup_client::cli::{Cli, Command, ConfigAction};
use nextmeetup_client::config::ClientConfig;
use nextmeetup_client::error::{ClientError, ClientResult};
use nextmeetup_core::{TracingConfig, init_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    // Load configuration
    let mut config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path).map_err(ClientError::Config)?
    } else {
        ClientConfig::load().unwrap_or_else(|e| {
            eprintln!("warning: ignoring default config: {}", e);
            ClientConfig::default()
        })
    };
    cli.apply_overrides(&mut config);

    let tracing_config = if config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => nextmeetup_client::commands::config::dump(&config),
            ConfigAction::Validate => nextmeetup_client::commands::config::validate(&config),
            ConfigAction::Path => nextmeetup_client::commands::config::path(),
        },
        None => nextmeetup_client::commands::check::run(&config).await,
    }
}
