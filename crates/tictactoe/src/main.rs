//! Tic-tac-toe console game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Console, PlayConfig, run_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;
    let config = cli.apply(config);

    initialize_tracing(config.log_filter());
    info!(?config, "Starting tictactoe");

    let mut console = Console::stdio();
    let outcomes = run_session(&config, &mut console)?;
    info!(rounds = outcomes.len(), "Exiting");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
