//! Terminal consistency invariant.

use super::super::board::CELL_COUNT;
use super::super::State;
use super::Invariant;
use super::single_winner::line_owners;

/// Invariant: a state is terminal exactly when the board is full or some
/// player owns a complete line.
pub struct TerminalConsistentInvariant;

impl Invariant<State> for TerminalConsistentInvariant {
    fn holds(state: &State) -> bool {
        let full = state.filled() == CELL_COUNT;
        let won = !line_owners(state.squares()).is_empty();
        state.is_terminal() == (full || won)
    }

    fn description() -> &'static str {
        "Terminal iff the board is full or a line is complete"
    }
}
