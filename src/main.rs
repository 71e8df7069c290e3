//! Main entry point for the flashname CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use flashname::{Cli, capsule, io};

/// Application entry point.
///
/// Every failure, including bad usage, exits with status 1; `--help` and
/// `--version` exit with 0.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    cli.init_tracing();

    match run(&cli).await {
        Ok(name) => {
            println!("{}", name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the capsule named on the command line and extract its flashback name.
async fn run(cli: &Cli) -> Result<String> {
    let source = io::open(&cli.file)
        .with_context(|| format!("Could not open '{}'", cli.file))?;

    let data = source
        .read_all()
        .await
        .with_context(|| format!("Could not read file '{}'", source.location()))?;
    info!(size = data.len(), "loaded {}", source.location());

    capsule::extract(&data).with_context(|| {
        format!(
            "Could not extract the flashback name from '{}'",
            source.location()
        )
    })
}
