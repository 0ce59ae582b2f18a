//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    choose_best_move, search, Board, BoardBuilder, Color, GameStatus, Move, MoveError, MoveList,
    Piece, SearchConfig, SearchError, SearchResult, Square, SquareError,
};
