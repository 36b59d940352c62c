//! Immutable game positions.

use super::board::{BOARD_SIZE, CELL_COUNT, LineTally};
use super::error::InvalidMove;
use super::invariants::assert_invariants;
use super::types::{MoveIndex, Player, Square};
use std::fmt;
use std::sync::OnceLock;
use tracing::instrument;

/// A tic-tac-toe position together with the side to move.
///
/// A state is never modified once built. New positions come from
/// [`State::derive`], which copies the parent's squares. The winner and
/// unblocked line counts are computed on first request and cached.
#[derive(Debug, Clone)]
pub struct State {
    pub(crate) squares: [Square; CELL_COUNT],
    pub(crate) mover: Player,
    pub(crate) filled: usize,
    pub(crate) last_move: Option<MoveIndex>,
    pub(crate) tally: OnceLock<LineTally>,
}

impl State {
    /// Creates the empty starting position with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
            mover: Player::X,
            filled: 0,
            last_move: None,
            tally: OnceLock::new(),
        }
    }

    /// Returns the position reached when the mover marks `index`.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::GameOver`] if this state is terminal (whatever the index)
    /// - [`InvalidMove::OutOfRange`] if `index` is not on the board
    /// - [`InvalidMove::Occupied`] if the square is taken
    #[instrument(level = "trace", skip(self), fields(mover = ?self.mover, filled = self.filled))]
    pub fn derive(&self, index: MoveIndex) -> Result<State, InvalidMove> {
        if self.is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange { index });
        }
        if self.squares[index] != Square::Empty {
            return Err(InvalidMove::Occupied { index });
        }

        let child = self.place(index);
        assert_invariants(&child);
        Ok(child)
    }

    /// Applies a move already known to be legal.
    fn place(&self, index: MoveIndex) -> State {
        let mut squares = self.squares;
        squares[index] = Square::Occupied(self.mover);
        State {
            squares,
            mover: self.mover.opponent(),
            filled: self.filled + 1,
            last_move: Some(index),
            tally: OnceLock::new(),
        }
    }

    /// Whether the game has ended, by a win or a full board.
    pub fn is_terminal(&self) -> bool {
        self.filled == CELL_COUNT || self.winner().is_some()
    }

    /// Player owning a complete line, if any.
    ///
    /// `None` does not mean the game is drawn; check [`State::is_terminal`].
    pub fn winner(&self) -> Option<Player> {
        self.tally().winner()
    }

    /// Number of lines holding at least one of `player`'s marks and none of
    /// the opponent's.
    pub fn unblocked_line_count(&self, player: Player) -> u32 {
        self.tally().unblocked(player)
    }

    fn tally(&self) -> &LineTally {
        self.tally.get_or_init(|| LineTally::scan(&self.squares))
    }

    /// Every position reachable in one move, in increasing square order.
    ///
    /// Empty when the state is terminal.
    pub fn children(&self) -> Vec<State> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_squares().map(|index| self.place(index)).collect()
    }

    /// Indices of the empty squares, ascending.
    pub fn empty_squares(&self) -> impl Iterator<Item = MoveIndex> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Player to move next.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Square filled to reach this state, `None` for the starting position.
    pub fn last_move(&self) -> Option<MoveIndex> {
        self.last_move
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Squares in row-major order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Owned copy of the squares.
    pub fn squares_snapshot(&self) -> [Square; CELL_COUNT] {
        self.squares
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.mover == other.mover
            && self.filled == other.filled
            && self.last_move == other.last_move
    }
}

impl Eq for State {}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(BOARD_SIZE * 4 + 1);
        writeln!(f, "{rule}")?;
        for (row, squares) in self.squares.chunks(BOARD_SIZE).enumerate() {
            write!(f, "|")?;
            for (col, square) in squares.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, " {} |", row * BOARD_SIZE + col + 1)?,
                    Square::Occupied(player) => write!(f, " {} |", player.symbol())?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{rule}")
    }
}

/// Formats a state as a human-readable board.
///
/// Empty squares show their 1-based number so a human can pick one.
pub fn render(state: &State) -> String {
    state.to_string()
}
