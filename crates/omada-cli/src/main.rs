mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use omada_api::OmadaClient;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "omada", &mut std::io::stdout());
            Ok(())
        }

        // Everything else talks to the controller
        cmd => {
            let client = connect(&cli.global)?;
            client.login().await?;

            tracing::debug!(command = ?cmd, "dispatching command");
            let result = commands::dispatch(cmd, &client, &cli.global).await;

            if let Err(e) = client.logout().await {
                tracing::debug!(error = %e, "logout failed");
            }
            result
        }
    }
}

/// Build the client from the config file, CLI overrides, and prompts.
fn connect(global: &cli::GlobalOpts) -> Result<OmadaClient, CliError> {
    let cfg = config::load(global)?;
    let cfg = config::ensure_credentials(cfg)?;
    Ok(OmadaClient::new(cfg.to_client_config()?)?)
}
