//! Contestant trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use alphabeta_tictactoe::{MoveIndex, State};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::instrument;

/// Prefix marking a contestant name as a minimax AI, followed by its depth.
pub const AI_PREFIX: &str = "AI-";

/// Trait for contestants that can pick moves.
pub trait Contestant {
    /// Gets a move from this contestant.
    ///
    /// Returns a zero-based square index. The index is not guaranteed to be
    /// legal; the caller validates it and asks again on rejection.
    fn choose_move(
        &mut self,
        state: &State,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<MoveIndex>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;

    /// Whether moves come from search rather than a person.
    fn is_ai(&self) -> bool;
}

/// What kind of contestant a name describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestantKind {
    /// A person typing moves.
    Human,
    /// Minimax search at a fixed depth.
    Minimax {
        /// Plies searched per move.
        depth: u32,
    },
}

impl ContestantKind {
    /// Classifies a contestant by name.
    ///
    /// `AI-<depth>` with a positive depth is a minimax AI; every other name,
    /// including `AI-0` and `AI-abc`, is a human.
    #[instrument]
    pub fn from_name(name: &str) -> Self {
        name.strip_prefix(AI_PREFIX)
            .and_then(|depth| depth.parse::<u32>().ok())
            .filter(|&depth| depth > 0)
            .map_or(ContestantKind::Human, |depth| ContestantKind::Minimax {
                depth,
            })
    }
}

/// Builds a contestant from its name.
#[instrument]
pub fn contestant_from_name(name: &str) -> Box<dyn Contestant> {
    match ContestantKind::from_name(name) {
        ContestantKind::Human => Box::new(HumanPlayer::new(name)),
        ContestantKind::Minimax { depth } => Box::new(MinimaxPlayer::new(name, depth)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_names() {
        assert_eq!(
            ContestantKind::from_name("AI-3"),
            ContestantKind::Minimax { depth: 3 }
        );
        assert_eq!(
            ContestantKind::from_name("AI-9"),
            ContestantKind::Minimax { depth: 9 }
        );
    }

    #[test]
    fn test_human_names() {
        for name in ["Alice", "AI-", "AI-0", "AI-x", "ai-3", "AI", "A"] {
            assert_eq!(ContestantKind::from_name(name), ContestantKind::Human, "{name}");
        }
    }

    #[test]
    fn test_contestant_from_name() {
        let ai = contestant_from_name("AI-2");
        assert!(ai.is_ai());
        assert_eq!(ai.name(), "AI-2");

        let human = contestant_from_name("Bob");
        assert!(!human.is_ai());
        assert_eq!(human.name(), "Bob");
    }
}
