//! Tic-tac-toe tournaments from the terminal.
//!
//! ```text
//! tictactoe AI-9 Alice --matches 3
//! ```

#![warn(missing_docs)]

use alphabeta_arena::{Cli, Tournament};
use anyhow::Result;
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Log to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

/// Runs the configured tournament over stdin and stdout.
#[instrument(skip(cli))]
fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve()?;
    info!(
        player1 = %config.player1(),
        player2 = %config.player2(),
        matches = *config.matches(),
        "Starting tournament"
    );

    let mut tournament = Tournament::from_config(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = tournament.run(stdin.lock(), stdout.lock())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
