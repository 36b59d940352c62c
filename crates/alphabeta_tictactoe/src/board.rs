//! Board geometry and the per-line tally behind win detection and the
//! search heuristic.

use super::types::{Player, Square};
use strum::IntoEnumIterator;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Rows, columns and the two diagonals.
pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Index of the center square (the opening move).
pub const CENTER: usize = (CELL_COUNT - 1) / 2;

/// Every winning line as a list of square indices.
///
/// Ordered rows first, then columns, then the main and anti diagonal.
pub const LINES: [[usize; BOARD_SIZE]; LINE_COUNT] = build_lines();

const fn build_lines() -> [[usize; BOARD_SIZE]; LINE_COUNT] {
    let mut lines = [[0; BOARD_SIZE]; LINE_COUNT];
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            lines[i][j] = i * BOARD_SIZE + j;
            lines[BOARD_SIZE + i][j] = j * BOARD_SIZE + i;
            j += 1;
        }
        lines[2 * BOARD_SIZE][i] = i * BOARD_SIZE + i;
        lines[2 * BOARD_SIZE + 1][i] = i * BOARD_SIZE + (BOARD_SIZE - 1 - i);
        i += 1;
    }
    lines
}

/// Result of one scan over every line of a board.
///
/// Holds the winner (if a player owns a complete line) and, for each player,
/// the number of lines holding at least one of their marks and none of the
/// opponent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTally {
    winner: Option<Player>,
    unblocked_x: u32,
    unblocked_o: u32,
}

impl LineTally {
    /// Scans all lines of `squares` for both players.
    ///
    /// Each player is tallied independently: a line can be blocked for one
    /// player while fully owned by the other.
    pub fn scan(squares: &[Square; CELL_COUNT]) -> Self {
        let mut tally = Self::default();

        for line in &LINES {
            for player in Player::iter() {
                let mut count = 0;
                let mut blocked = false;

                for &idx in line {
                    match squares[idx] {
                        Square::Occupied(p) if p == player => count += 1,
                        Square::Occupied(_) => {
                            blocked = true;
                            break;
                        }
                        Square::Empty => {}
                    }
                }

                if blocked || count == 0 {
                    continue;
                }

                *tally.unblocked_mut(player) += 1;

                if count == BOARD_SIZE && tally.winner.is_none() {
                    tally.winner = Some(player);
                }
            }
        }

        tally
    }

    /// Player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Unblocked line count for `player`.
    pub fn unblocked(&self, player: Player) -> u32 {
        match player {
            Player::X => self.unblocked_x,
            Player::O => self.unblocked_o,
        }
    }

    fn unblocked_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::X => &mut self.unblocked_x,
            Player::O => &mut self.unblocked_o,
        }
    }
}
