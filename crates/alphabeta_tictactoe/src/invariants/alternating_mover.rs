//! Alternating mover invariant: players take strict turns.

use super::super::{Player, Square, State};
use super::Invariant;

/// Invariant: the mover matches the mark counts.
///
/// X moves first, so X is to move when both players have the same number of
/// marks, and O is to move when X has exactly one more.
pub struct AlternatingMoverInvariant;

impl Invariant<State> for AlternatingMoverInvariant {
    fn holds(state: &State) -> bool {
        let count = |player: Player| {
            state
                .squares()
                .iter()
                .filter(|square| **square == Square::Occupied(player))
                .count()
        };
        let x_count = count(Player::X);
        let o_count = count(Player::O);

        match state.mover() {
            Player::X => x_count == o_count,
            Player::O => x_count == o_count + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
