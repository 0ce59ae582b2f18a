//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - checker contents and colors
//! - `Square` and `Direction` - the 1-32 playable square numbering
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::{is_on_board, Direction, Square, NUM_SQUARES};
