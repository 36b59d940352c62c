//! Error types for move application and search.

use super::types::MoveIndex;
use derive_more::{Display, Error};

/// Error returned when a move cannot be applied to a state.
///
/// Indices are shown 1-based in messages, matching the numbers printed on
/// empty squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// The game is already over.
    #[display("Game is already over. No further moves can be made.")]
    GameOver,

    /// The index does not name a square on the board.
    #[display("{} is not a valid square.", index + 1)]
    OutOfRange {
        /// Zero-based index that was rejected.
        index: MoveIndex,
    },

    /// The square already holds a mark.
    #[display("That move cannot be performed. Square {} is already taken.", index + 1)]
    Occupied {
        /// Zero-based index that was rejected.
        index: MoveIndex,
    },
}

/// Error returned by [`crate::Search::best_move`].
///
/// These signal a caller bug rather than a condition worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The position is terminal, or yielded no children.
    #[display("No move available from this position")]
    NoMoveAvailable,

    /// A search needs to look at least one ply ahead.
    #[display("Search depth must be at least 1")]
    ZeroDepth,
}
