//! Checkers board representation and game logic.
//!
//! The 32 dark squares are numbered 1-32 row by row from Black's side.
//! Implements American checkers rules: forward-only pawns, kings in all four
//! diagonal directions, mandatory capture with maximal multi-jumps, crowning
//! on the far row and draws by the no-capture counter or repetition.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::Black);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod geometry;
mod movegen;
mod perft;
pub mod prelude;
mod search;
mod state;
mod status;
mod types;
pub mod validator;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveError, SearchError, SquareError};
pub use movegen::generate_moves;
pub use state::{
    Board, MoveOutcome, PieceCounts, Snapshot, NO_CAPTURE_DRAW_MOVES, REPETITION_DRAW_THRESHOLD,
};
pub use status::GameStatus;
pub use types::{is_on_board, Color, Direction, Move, MoveList, Piece, Square, NUM_SQUARES};

// Public API - search functions and configuration
pub use search::{
    choose_best_move, search, SearchConfig, SearchInfo, SearchInfoCallback, SearchLogger,
    SearchParams, SearchResult, StdoutLogger, DEFAULT_DEPTH, DRAW_SCORE, WIN_SCORE, WIN_THRESHOLD,
};

#[cfg(feature = "logging")]
pub use search::LogLogger;

// Search internals for users who want to walk the tree themselves
pub use search::{NodeState, SearchNode};
