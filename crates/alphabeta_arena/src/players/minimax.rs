//! AI player backed by alpha-beta search.

use super::Contestant;
use alphabeta_tictactoe::{MoveIndex, Search, State};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// AI that plays the search's best move at a fixed depth.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
    depth: u32,
}

impl MinimaxPlayer {
    /// Creates a new minimax player searching `depth` plies.
    pub fn new(name: impl Into<String>, depth: u32) -> Self {
        Self {
            name: name.into(),
            depth,
        }
    }

    /// Plies searched per move.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Contestant for MinimaxPlayer {
    fn choose_move(
        &mut self,
        state: &State,
        _input: &mut dyn BufRead,
        _output: &mut dyn Write,
    ) -> Result<MoveIndex> {
        debug!(ai = %self.name, depth = self.depth, "AI making move");

        let index = Search::best_move(state, self.depth)
            .with_context(|| format!("{} could not choose a move", self.name))?;

        debug!(ai = %self.name, position = index, "AI chose position");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ai(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_opens_in_center() {
        let mut player = MinimaxPlayer::new("AI-1", 1);
        let index = player
            .choose_move(&State::new(), &mut Cursor::new(""), &mut Vec::<u8>::new())
            .unwrap();
        assert_eq!(index, 4);
    }

    #[test]
    fn test_terminal_state_is_error() {
        let state = [0, 3, 1, 4, 2]
            .iter()
            .try_fold(State::new(), |s, &i| s.derive(i))
            .unwrap();
        let mut player = MinimaxPlayer::new("AI-3", 3);
        let result = player.choose_move(&state, &mut Cursor::new(""), &mut Vec::<u8>::new());
        assert!(result.is_err());
    }
}
