//! Stateless legality predicates for single steps and single jumps.
//!
//! These check one hop in isolation. Whether a simple move is legal *in the
//! game* also depends on the mandatory-capture rule, which only the move
//! generator can see.

use super::{Board, Color, Piece, Square};

pub use super::types::is_on_board;

/// Pawns move toward the opponent's back rank; kings go either way.
#[inline]
fn direction_allowed(piece: Piece, color: Color, from: Square, to: Square) -> bool {
    if piece.is_king() {
        return true;
    }
    let dr = to.row() as i8 - from.row() as i8;
    dr.signum() == color.forward()
}

/// A one-step diagonal move by a piece of `color` onto an empty square.
#[must_use]
pub fn is_valid_simple_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let piece = board.piece(from);
    piece.is_color(color)
        && board.piece(to).is_empty()
        && from.is_adjacent_to(to)
        && direction_allowed(piece, color, from, to)
}

/// A two-step straight diagonal jump by a piece of `color` over an opposing
/// piece onto an empty square.
#[must_use]
pub fn is_valid_jump(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let piece = board.piece(from);
    piece.is_color(color) && jumped_square(board, piece, from, to).is_some()
}

/// The square captured if `piece` (standing on `from`, possibly only
/// virtually during a chain) jumps to `to`, or `None` if that jump is not
/// allowed.
pub(crate) fn jumped_square(board: &Board, piece: Piece, from: Square, to: Square) -> Option<Square> {
    let color = piece.color()?;
    let over = Square::between(from, to)?;
    if !board.piece(to).is_empty() || !direction_allowed(piece, color, from, to) {
        return None;
    }
    board.piece(over).is_color(color.opponent()).then_some(over)
}
