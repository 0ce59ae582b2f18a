//! Playable-square numbering.
//!
//! The 32 dark squares are numbered 1-32 row by row from Black's side:
//! row 0 holds 1-4, row 7 holds 29-32. Even rows use the odd columns
//! (1, 3, 5, 7), odd rows use the even columns (0, 2, 4, 6). This numbering
//! is the coordinate contract shared with any presentation layer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of playable squares
pub const NUM_SQUARES: usize = 32;

/// One of the four diagonal directions. "North" points toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All directions, ordered so that neighbours come out in ascending
    /// position order.
    pub const ALL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    #[inline]
    #[must_use]
    pub const fn row_delta(self) -> i8 {
        match self {
            Direction::NorthWest | Direction::NorthEast => -1,
            Direction::SouthWest | Direction::SouthEast => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn col_delta(self) -> i8 {
        match self {
            Direction::NorthWest | Direction::SouthWest => -1,
            Direction::NorthEast | Direction::SouthEast => 1,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::NorthWest => 0,
            Direction::NorthEast => 1,
            Direction::SouthWest => 2,
            Direction::SouthEast => 3,
        }
    }
}

/// A playable square identified by its position number (1-32).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "u8"))]
pub struct Square(u8);

impl Square {
    /// Create a square from a position number with bounds checking
    pub fn new(position: i32) -> Result<Self, SquareError> {
        if is_on_board(position) {
            Ok(Square(position as u8))
        } else {
            Err(SquareError::OutOfRange { position })
        }
    }

    /// Create a square from a zero-based index (0-31). Panics in const
    /// contexts when out of range; callers only pass table indices.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index < NUM_SQUARES);
        Square(index as u8 + 1)
    }

    /// Square at (row, col), or `None` if off the board or a light square
    #[must_use]
    pub fn from_coords(row: i8, col: i8) -> Option<Self> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        // Dark squares have odd row + col
        if (row + col) % 2 == 0 {
            return None;
        }
        let position = row as u8 * 4 + col as u8 / 2 + 1;
        Some(Square(position))
    }

    /// Position number, 1-32
    #[inline]
    #[must_use]
    pub const fn position(self) -> u8 {
        self.0
    }

    /// Zero-based index into board arrays
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Row 0-7, row 0 being Black's back rank
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        (self.0 - 1) / 4
    }

    /// Column 0-7
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        let offset = ((self.0 - 1) % 4) * 2;
        if self.row() % 2 == 0 {
            offset + 1
        } else {
            offset
        }
    }

    /// Diagonal neighbour in `direction`, if on the board
    #[inline]
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Square> {
        crate::board::geometry::NEIGHBORS[self.index()][direction.index()]
    }

    /// Diagonally adjacent squares in ascending position order (2 to 4 of them)
    pub fn adjacent(self) -> impl Iterator<Item = Square> {
        crate::board::geometry::NEIGHBORS[self.index()]
            .into_iter()
            .flatten()
    }

    /// Raw position numbers that might be one jump away (±7, ±9), in
    /// ascending order. Not filtered: values may be off the board or wrap
    /// around an edge, callers filter with [`is_on_board`] and the jump
    /// geometry check.
    #[inline]
    #[must_use]
    pub const fn jump_candidates(self) -> [i32; 4] {
        let p = self.0 as i32;
        [p - 9, p - 7, p + 7, p + 9]
    }

    /// The square jumped over when moving from `from` to `to`, if the two are
    /// exactly two diagonal steps apart in a straight line.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Option<Square> {
        crate::board::geometry::JUMPS[from.index()]
            .iter()
            .flatten()
            .find(|&&(_, landing)| landing == to)
            .map(|&(over, _)| over)
    }

    /// Returns true if `other` is one diagonal step away
    #[must_use]
    pub fn is_adjacent_to(self, other: Square) -> bool {
        let dr = other.row() as i8 - self.row() as i8;
        let dc = other.col() as i8 - self.col() as i8;
        dr.abs() == 1 && dc.abs() == 1
    }

    /// Iterate over all 32 squares in position order
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=NUM_SQUARES as u8).map(Square)
    }
}

/// True iff `position` is a playable position number (1-32)
#[inline]
#[must_use]
pub const fn is_on_board(position: i32) -> bool {
    position >= 1 && position <= NUM_SQUARES as i32
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Square {
    type Error = SquareError;

    fn try_from(position: i32) -> Result<Self, Self::Error> {
        Square::new(position)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_col() {
        let sq = Square::new(1).unwrap();
        assert_eq!((sq.row(), sq.col()), (0, 1));
        let sq = Square::new(5).unwrap();
        assert_eq!((sq.row(), sq.col()), (1, 0));
        let sq = Square::new(32).unwrap();
        assert_eq!((sq.row(), sq.col()), (7, 6));
        for sq in Square::all() {
            assert_eq!(Square::from_coords(sq.row() as i8, sq.col() as i8), Some(sq));
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Square::new(0), Err(SquareError::OutOfRange { position: 0 }));
        assert!(Square::new(33).is_err());
        assert!(Square::try_from(32).is_ok());
        assert_eq!(Square::from_coords(0, 0), None);
        assert_eq!(Square::from_coords(8, 1), None);
    }

    #[test]
    fn test_jump_candidates_are_raw_offsets() {
        let sq = Square::new(4).unwrap();
        assert_eq!(sq.jump_candidates(), [-5, -3, 11, 13]);
        assert_eq!(Square::between(sq, Square::new(11).unwrap()), Square::new(8).ok());
        assert_eq!(Square::between(sq, Square::new(13).unwrap()), None);
    }

    #[test]
    fn test_adjacency() {
        let a = Square::new(14).unwrap();
        assert!(a.is_adjacent_to(Square::new(10).unwrap()));
        assert!(!a.is_adjacent_to(Square::new(15).unwrap()));
        assert_eq!(
            a.neighbor(Direction::SouthEast),
            Some(Square::new(18).unwrap())
        );
        assert_eq!(Square::new(5).unwrap().neighbor(Direction::NorthWest), None);
    }
}
