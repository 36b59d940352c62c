//! Command-line interface for tic-tac-toe tournaments.

use crate::config::{ConfigError, TournamentConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Tic-tac-toe between humans and minimax AIs
///
/// Name a player `AI-<depth>` (e.g. `AI-9`) to have the computer play it,
/// searching that many plies ahead. Any other name is a human who types
/// square numbers.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe tournaments between humans and minimax AIs")]
#[command(version)]
pub struct Cli {
    /// First player (moves first in odd rounds)
    pub player1: Option<String>,

    /// Second player (moves first in even rounds)
    pub player2: Option<String>,

    /// Number of rounds to play
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub matches: Option<u32>,

    /// TOML file providing player1, player2 and matches
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the final standings as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Merges the config file (if any) with command-line values, which win.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<TournamentConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => TournamentConfig::from_file(path)?.with_overrides(
                self.player1.clone(),
                self.player2.clone(),
                self.matches,
            ),
            None => match (&self.player1, &self.player2) {
                (Some(player1), Some(player2)) => TournamentConfig::new(
                    player1.clone(),
                    player2.clone(),
                    self.matches.unwrap_or(1),
                ),
                _ => {
                    return Err(ConfigError::new(
                        "Two players are required. Usage: tictactoe <PLAYER1> <PLAYER2> [--matches N]"
                            .to_string(),
                    ));
                }
            },
        };

        config.validate()?;
        Ok(config)
    }
}
