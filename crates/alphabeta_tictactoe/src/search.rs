//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are signed: positive favours X (the maximizer), negative favours O
//! (the minimizer). Terminal outcomes score `±WIN_SCORE`; positions cut off by
//! the depth bound score by the unblocked-line heuristic, which is always
//! strictly smaller in magnitude.

use super::board::{CENTER, LINE_COUNT};
use super::error::SearchError;
use super::state::State;
use super::types::{MoveIndex, Player};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

/// Score of a won position; exceeds any heuristic value.
pub const WIN_SCORE: i32 = 2 * LINE_COUNT as i32;

/// Stateless minimax search over [`State`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Search;

impl Search {
    /// Returns the best move for the side to move, looking `depth` plies ahead.
    ///
    /// The empty board is answered with the center square without searching.
    /// When several moves share the best score the lowest index wins.
    ///
    /// # Errors
    ///
    /// - [`SearchError::NoMoveAvailable`] if `state` is terminal
    /// - [`SearchError::ZeroDepth`] if `depth` is 0
    #[instrument(skip(state), fields(filled = state.filled(), mover = ?state.mover()))]
    pub fn best_move(state: &State, depth: u32) -> Result<MoveIndex, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::NoMoveAvailable);
        }
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if state.filled() == 0 {
            debug!(index = CENTER, "Opening in the center");
            return Ok(CENTER);
        }

        let mover = state.mover();
        let mut best: Option<(MoveIndex, i32)> = None;

        for child in state.children() {
            let index = child.last_move().ok_or(SearchError::NoMoveAvailable)?;
            let score = Self::score(&child, depth - 1);
            trace!(index, score, "Scored candidate move");

            let improves = match best {
                None => true,
                Some((_, best_score)) => Self::prefers(mover, score, best_score),
            };
            if improves {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(SearchError::NoMoveAvailable)?;
        debug!(index, score, "Selected move");
        Ok(index)
    }

    /// Minimax score of `node` searched `depth` plies deep with a full window.
    pub fn score(node: &State, depth: u32) -> i32 {
        Self::score_window(node, depth, -WIN_SCORE, WIN_SCORE)
    }

    /// Alpha-beta score of `node` within the window `[alpha, beta]`.
    ///
    /// Fail-hard: results are clamped to the window, so only a full-window
    /// call yields the exact minimax value.
    pub fn score_window(node: &State, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        if node.is_terminal() {
            let score = Self::terminal_score(node);
            trace!(depth, score, "Terminal node");
            return score;
        }

        if depth == 0 {
            let score = Self::heuristic(node);
            trace!(score, "Depth limit reached");
            return score;
        }

        let mover = node.mover();
        for child in node.children() {
            let value = Self::score_window(&child, depth - 1, alpha, beta);
            match mover {
                Player::X => alpha = alpha.max(value),
                Player::O => beta = beta.min(value),
            }
            if beta <= alpha {
                trace!(depth, alpha, beta, "Pruned remaining children");
                break;
            }
        }

        match mover {
            Player::X => alpha,
            Player::O => beta,
        }
    }

    /// Positional estimate: X's unblocked lines minus O's.
    pub fn heuristic(node: &State) -> i32 {
        Player::iter()
            .map(|player| Self::sign(player) * node.unblocked_line_count(player) as i32)
            .sum()
    }

    fn terminal_score(node: &State) -> i32 {
        node.winner()
            .map_or(0, |player| Self::sign(player) * WIN_SCORE)
    }

    fn sign(player: Player) -> i32 {
        match player {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Whether `mover` strictly prefers `candidate` over `incumbent`.
    fn prefers(mover: Player, candidate: i32, incumbent: i32) -> bool {
        match mover {
            Player::X => candidate > incumbent,
            Player::O => candidate < incumbent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;

    fn play(moves: &[MoveIndex]) -> State {
        moves
            .iter()
            .try_fold(State::new(), |state, &index| state.derive(index))
            .expect("legal sequence")
    }

    #[test]
    fn test_win_score_dominates_heuristic() {
        assert!(WIN_SCORE > LINE_COUNT as i32);
        assert_eq!(WIN_SCORE, 16);
    }

    #[test]
    fn test_heuristic_empty_board() {
        assert_eq!(Search::heuristic(&State::new()), 0);
    }

    #[test]
    fn test_heuristic_is_line_difference() {
        let state = play(&[0, 4]);
        assert_eq!(Search::heuristic(&state), 2 - 3);
        assert_eq!(Search::score(&state, 0), -1);
    }

    #[test]
    fn test_score_terminal_ignores_depth() {
        let x_wins = play(&[0, 3, 1, 4, 2]);
        for depth in 0..4 {
            assert_eq!(Search::score(&x_wins, depth), WIN_SCORE);
        }
    }

    #[test]
    fn test_prefers_is_strict() {
        assert!(!Search::prefers(Player::X, 3, 3));
        assert!(!Search::prefers(Player::O, 3, 3));
        assert!(Search::prefers(Player::X, 4, 3));
        assert!(Search::prefers(Player::O, 2, 3));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let state = play(&[4]);
        assert_eq!(Search::best_move(&state, 0), Err(SearchError::ZeroDepth));
    }

    #[test]
    fn test_terminal_rejected() {
        let drawn = play(&[0, 4, 2, 1, 3, 5, 7, 6, 8]);
        assert_eq!(drawn.filled(), CELL_COUNT);
        assert_eq!(
            Search::best_move(&drawn, 3),
            Err(SearchError::NoMoveAvailable)
        );
    }

    #[test]
    fn test_opening_shortcut_at_any_depth() {
        for depth in 1..=9 {
            assert_eq!(Search::best_move(&State::new(), depth), Ok(CENTER));
        }
    }
}
