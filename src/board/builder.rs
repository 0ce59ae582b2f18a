//! Fluent builder for constructing checkers positions.
//!
//! Allows creating positions piece by piece, including kings, which the
//! list-based [`Board::from_positions`] cannot express.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color, Square};
//!
//! let board = BoardBuilder::new()
//!     .king(Square::new(14).unwrap(), Color::White)
//!     .pawn(Square::new(18).unwrap(), Color::Black)
//!     .build();
//! assert_eq!(board.king_count(Color::White), 1);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    moves_since_last_capture: u32,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            moves_since_last_capture: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for sq in Square::all() {
            match sq.position() {
                1..=12 => builder.pieces.push((sq, Piece::Pawn(Color::Black))),
                21..=32 => builder.pieces.push((sq, Piece::Pawn(Color::White))),
                _ => {}
            }
        }
        builder
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        if !piece.is_empty() {
            self.pieces.push((square, piece));
        }
        self
    }

    #[must_use]
    pub fn pawn(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::Pawn(color))
    }

    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::King(color))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Preset the no-capture move counter.
    #[must_use]
    pub fn moves_since_last_capture(mut self, moves: u32) -> Self {
        self.moves_since_last_capture = moves;
        self
    }

    /// Build the board. No position is recorded in the repetition table.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_occupying_piece(square, piece);
        }
        board.moves_since_last_capture = self.moves_since_last_capture;
        board
    }
}
