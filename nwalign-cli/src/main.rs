use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use nwalign_core::NwError;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<NwError>() {
            Some(NwError::Configuration(_)) => 2,
            Some(NwError::Io(_)) => 3,
            Some(NwError::InvalidInput(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

/// RUST_LOG wins, then NWALIGN_LOG, then the level implied by -v.
fn init_logging(verbose: u8) {
    let log_level = std::env::var("NWALIGN_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Align(args) => crate::cli::commands::align::run(args),
        Commands::Score(args) => crate::cli::commands::score::run(args),
    }
}
