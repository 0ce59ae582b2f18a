//! Move types and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A checkers move.
///
/// Multi-jumps are a single logical move: every captured square is listed in
/// capture order and the piece is relocated once when the move is applied.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// One diagonal step onto an empty square
    Simple { from: Square, to: Square },
    /// Two diagonal steps capturing the piece on `jumped`
    Jump {
        from: Square,
        to: Square,
        jumped: Square,
    },
    /// A chain of jumps. `intermediate` holds the landing squares between
    /// `from` and `to`, so `jumped.len() == intermediate.len() + 1`.
    MultiJump {
        from: Square,
        to: Square,
        jumped: Vec<Square>,
        intermediate: Vec<Square>,
    },
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn simple(from: Square, to: Square) -> Self {
        Move::Simple { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn jump(from: Square, to: Square, jumped: Square) -> Self {
        Move::Jump { from, to, jumped }
    }

    /// Build a capture from its landing squares (`path`, in order, ending at
    /// the destination) and the squares captured on each hop. A chain of one
    /// hop becomes a [`Move::Jump`].
    ///
    /// Returns `None` if `path` is empty or the lengths disagree.
    #[must_use]
    pub fn from_chain(from: Square, path: &[Square], jumped: &[Square]) -> Option<Self> {
        if path.is_empty() || path.len() != jumped.len() {
            return None;
        }
        let to = path[path.len() - 1];
        if jumped.len() == 1 {
            return Some(Move::Jump {
                from,
                to,
                jumped: jumped[0],
            });
        }
        Some(Move::MultiJump {
            from,
            to,
            jumped: jumped.to_vec(),
            intermediate: path[..path.len() - 1].to_vec(),
        })
    }

    /// Starting square
    #[inline]
    #[must_use]
    pub fn from(&self) -> Square {
        match self {
            Move::Simple { from, .. } | Move::Jump { from, .. } | Move::MultiJump { from, .. } => {
                *from
            }
        }
    }

    /// Final landing square
    #[inline]
    #[must_use]
    pub fn to(&self) -> Square {
        match self {
            Move::Simple { to, .. } | Move::Jump { to, .. } | Move::MultiJump { to, .. } => *to,
        }
    }

    /// Captured squares in capture order, `None` for a simple move
    #[must_use]
    pub fn jumped_positions(&self) -> Option<&[Square]> {
        match self {
            Move::Simple { .. } => None,
            Move::Jump { jumped, .. } => Some(std::slice::from_ref(jumped)),
            Move::MultiJump { jumped, .. } => Some(jumped.as_slice()),
        }
    }

    /// Landing squares between start and end (empty unless a multi-jump)
    #[must_use]
    pub fn intermediate_positions(&self) -> &[Square] {
        match self {
            Move::MultiJump { intermediate, .. } => intermediate,
            _ => &[],
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_jump(&self) -> bool {
        !matches!(self, Move::Simple { .. })
    }

    /// Number of pieces this move captures
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.jumped_positions().map_or(0, <[Square]>::len)
    }
}

/// Standard checkers notation: `11-15` for a step, `18x11` for a jump and
/// `26x19x10x1` for a chain.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Simple { from, to } => write!(f, "{from}-{to}"),
            Move::Jump { from, to, .. } => write!(f, "{from}x{to}"),
            Move::MultiJump {
                from,
                to,
                intermediate,
                ..
            } => {
                write!(f, "{from}")?;
                for sq in intermediate {
                    write!(f, "x{sq}")?;
                }
                write!(f, "x{to}")
            }
        }
    }
}

/// Legal moves for one side, in generation order
pub type MoveList = Vec<Move>;
