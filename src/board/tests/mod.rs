//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `board.rs` - Construction, placement, removal, equality and hashing
//! - `movegen.rs` - Legal move generation, mandatory capture and multi-jumps
//! - `perft.rs` - Leaf counts for move generation correctness
//! - `draw.rs` - Draw detection (no-capture counter, repetition) and game end
//! - `search.rs` - Minimax search behaviour
//! - `proptest.rs` - Property-based tests

mod draw;
mod perft;
mod search;

use crate::board::Square;

/// Shorthand for a known-valid position number
fn sq(position: i32) -> Square {
    Square::new(position).unwrap()
}
