//! Single winner invariant: at most one player completes a line.

use super::super::board::LINES;
use super::super::{Player, Square, State};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: no more than one player owns a complete line, and the cached
/// winner names that player.
pub struct SingleWinnerInvariant;

/// Players owning at least one complete line.
pub(crate) fn line_owners(squares: &[Square]) -> Vec<Player> {
    Player::iter()
        .filter(|&player| {
            LINES.iter().any(|line| {
                line.iter()
                    .all(|&idx| squares[idx] == Square::Occupied(player))
            })
        })
        .collect()
}

impl Invariant<State> for SingleWinnerInvariant {
    fn holds(state: &State) -> bool {
        match line_owners(state.squares()).as_slice() {
            [] => state.winner().is_none(),
            [owner] => state.winner() == Some(*owner),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "At most one player completes a line"
    }
}
