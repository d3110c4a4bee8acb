//! Pivnet API CLI binary.
//!
//! A command-line interface for interacting with the Pivnet API.

use std::process::ExitCode;

use clap::Parser;
use pivnet::cli::{commands, Cli};
use pivnet::PivnetClient;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let Some(config) = cli.client_config() else {
        eprintln!("Error: Pivnet API token required");
        eprintln!("Hint: Pass --api-token or set PIVNET_API_TOKEN");
        return ExitCode::FAILURE;
    };

    let client = match PivnetClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match commands::run(&client, cli.command, cli.print_as, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
