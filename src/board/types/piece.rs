//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Checker colors. Black starts on squares 1-12 and moves toward row 7,
/// White starts on squares 21-32 and moves toward row 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors in index order (Black=0, White=1)
    pub const BOTH: [Color; 2] = [Color::Black, Color::White];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row direction a pawn of this color advances in (+1 for Black, -1 for White)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// Row on which a pawn of this color is crowned (7 for Black, 0 for White)
    #[inline]
    #[must_use]
    pub const fn crowning_row(self) -> u8 {
        match self {
            Color::Black => 7,
            Color::White => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Contents of a playable square.
///
/// `Empty` is an ordinary variant rather than a shared sentinel, so pieces
/// compare by value: two black pawns are equal wherever they stand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    #[default]
    Empty,
    Pawn(Color),
    King(Color),
}

impl Piece {
    /// Color of the piece, `None` for an empty square
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Pawn(color) | Piece::King(color) => Some(color),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::King(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Piece::Pawn(Color::Black) | Piece::King(Color::Black))
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Piece::Pawn(Color::White) | Piece::King(Color::White))
    }

    /// Returns true if the piece belongs to `color`. Always false for `Empty`.
    #[inline]
    #[must_use]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Returns true if both squares hold pieces of the same color
    #[inline]
    #[must_use]
    pub fn is_same_color_as(self, other: Piece) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Promote a pawn to a king. Kings and empty squares are left unchanged,
    /// so promotion can never be undone.
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Piece {
        match self {
            Piece::Pawn(color) => Piece::King(color),
            other => other,
        }
    }

    /// In-place form of [`Piece::crowned`].
    #[inline]
    pub fn king_me(&mut self) {
        *self = self.crowned();
    }

    /// Single-character form: `b`/`w` for pawns, `B`/`W` for kings, `.` for empty
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Pawn(Color::Black) => 'b',
            Piece::Pawn(Color::White) => 'w',
            Piece::King(Color::Black) => 'B',
            Piece::King(Color::White) => 'W',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
