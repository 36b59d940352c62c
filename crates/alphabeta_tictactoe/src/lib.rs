//! Alpha-beta tic-tac-toe - game positions and adversarial search
//!
//! This library models tic-tac-toe positions as immutable values and finds
//! moves with depth-limited minimax and alpha-beta pruning.
//!
//! # Architecture
//!
//! - **State**: a position, the side to move, and a cached line tally
//! - **Search**: minimax over states, scoring cut-off positions by the number
//!   of lines each player can still complete
//! - **Invariants**: checkable properties of every reachable state
//!
//! # Example
//!
//! ```
//! use alphabeta_tictactoe::{Search, State};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = State::new().derive(0)?.derive(4)?;
//! let reply = Search::best_move(&state, 4)?;
//! let state = state.derive(reply)?;
//! println!("{state}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod search;
mod state;
mod types;

pub mod invariants;

// Crate-level exports - Board geometry
pub use board::{BOARD_SIZE, CELL_COUNT, CENTER, LINE_COUNT, LINES, LineTally};

// Crate-level exports - Errors
pub use error::{InvalidMove, SearchError};

// Crate-level exports - Search
pub use search::{Search, WIN_SCORE};

// Crate-level exports - Positions
pub use state::{State, render};
pub use types::{MoveIndex, Player, Square};
