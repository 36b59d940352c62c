//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// X always moves first. The search treats X as the maximizing side and O as
/// the minimizing side, but that convention lives in [`crate::Search`] only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Zero-based index of a square, row-major.
pub type MoveIndex = usize;

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_iter_yields_x_first() {
        let players: Vec<_> = Player::iter().collect();
        assert_eq!(players, vec![Player::X, Player::O]);
    }

    #[test]
    fn test_square_occupant() {
        assert_eq!(Square::Empty.occupant(), None);
        assert_eq!(Square::Occupied(Player::O).occupant(), Some(Player::O));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Player::X).unwrap(), "\"X\"");
        let square: Square = serde_json::from_str("{\"Occupied\":\"O\"}").unwrap();
        assert_eq!(square, Square::Occupied(Player::O));
    }
}
