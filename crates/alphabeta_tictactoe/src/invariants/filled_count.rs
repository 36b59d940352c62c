//! Filled count invariant: the stored count matches the board.

use super::super::{Square, State};
use super::Invariant;

/// Invariant: `filled` equals the number of occupied squares, and
/// `last_move` names a square held by the player who just moved.
pub struct FilledCountInvariant;

impl Invariant<State> for FilledCountInvariant {
    fn holds(state: &State) -> bool {
        let occupied = state
            .squares()
            .iter()
            .filter(|square| **square != Square::Empty)
            .count();
        if occupied != state.filled() {
            return false;
        }

        match state.last_move() {
            None => state.filled() == 0,
            Some(index) => {
                state.squares().get(index).copied()
                    == Some(Square::Occupied(state.mover().opponent()))
            }
        }
    }

    fn description() -> &'static str {
        "Filled count matches occupied squares and the last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_new_state_holds() {
        assert!(FilledCountInvariant::holds(&State::new()));
    }

    #[test]
    fn test_after_moves_holds() {
        let state = State::new().derive(8).and_then(|s| s.derive(0)).unwrap();
        assert!(FilledCountInvariant::holds(&state));
    }

    #[test]
    fn test_miscounted_state_violates() {
        let mut state = State::new().derive(8).unwrap();
        state.filled = 2;
        assert!(!FilledCountInvariant::holds(&state));
    }

    #[test]
    fn test_last_move_owned_by_wrong_player_violates() {
        let mut state = State::new().derive(8).unwrap();
        state.squares[8] = Square::Occupied(Player::O);
        assert!(!FilledCountInvariant::holds(&state));
    }
}
