//! Alpha-beta arena - tic-tac-toe matches between humans and AIs
//!
//! The orchestration layer around [`alphabeta_tictactoe`]: it asks contestants
//! for moves, re-prompts on rejected ones, prints the board, and tallies
//! tournaments.
//!
//! # Architecture
//!
//! - **Players**: humans typing square numbers, minimax AIs at a fixed depth
//! - **Orchestrator**: plays a single match over line-based input and text output
//! - **Tournament**: alternates who moves first and keeps the scoreboard
//! - **Config**: CLI arguments merged with an optional TOML file
//!
//! # Example
//!
//! ```
//! use alphabeta_arena::{Tournament, TournamentConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = TournamentConfig::new("AI-9".to_string(), "AI-2".to_string(), 2);
//! let mut tournament = Tournament::from_config(&config);
//! let summary = tournament.run(std::io::empty(), std::io::sink())?;
//! assert_eq!(*summary.matches(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod orchestrator;
mod players;
mod tournament;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ConfigError, TournamentConfig};

// Crate-level exports - Contestants
pub use players::{
    AI_PREFIX, Contestant, ContestantKind, HumanPlayer, MinimaxPlayer, contestant_from_name,
};

// Crate-level exports - Matches and tournaments
pub use orchestrator::{MatchOutcome, Orchestrator, announce_turn};
pub use tournament::{PlayerRecord, Tournament, TournamentSummary};
