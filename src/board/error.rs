//! Error types for board operations and search.

use std::fmt;

use super::{Color, Square};

/// Error type for position numbers outside the playable range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Position is not in 1..=32
    OutOfRange { position: i32 },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { position } => {
                write!(f, "Position {position} out of range (must be 1-32)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not among the legal moves for the side to move
    IllegalMove { from: Square, to: Square },
    /// Tried to remove a piece from an empty square
    EmptySquareRemoval { square: Square },
    /// A position number outside 1..=32 was supplied
    OutOfRange(SquareError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move from {from} to {to}")
            }
            MoveError::EmptySquareRemoval { square } => {
                write!(f, "Cannot remove a piece from empty square {square}")
            }
            MoveError::OutOfRange(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::OutOfRange(err)
    }
}

/// Error type for search preconditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Search was asked to move for a side with no legal moves
    NoLegalMoves { color: Color },
    /// Search depth must be at least 1
    ZeroDepth,
    /// Running piece counters disagree with the board contents
    InconsistentCounts { color: Color },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves { color } => {
                write!(f, "{color} has no legal moves to search")
            }
            SearchError::ZeroDepth => write!(f, "Search depth must be at least 1"),
            SearchError::InconsistentCounts { color } => {
                write!(f, "Piece counters for {color} disagree with the board")
            }
        }
    }
}

impl std::error::Error for SearchError {}
