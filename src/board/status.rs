//! Game status reported by [`Board::status`](super::Board::status).

use std::fmt;

use super::Color;

/// Whether the game is still going, and if not, how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Draw,
    /// The named color won; the side to move lost its last piece or move
    Won(Color),
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In Progress"),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::Won(color) => write!(f, "Won by {color}"),
        }
    }
}
