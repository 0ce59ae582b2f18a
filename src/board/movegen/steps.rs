use crate::board::validator::is_valid_simple_move;
use crate::board::{Board, Color, Move, MoveList, Square};

/// Simple one-step moves for the piece on `from`
pub(super) fn generate_steps(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    for to in from.adjacent() {
        if is_valid_simple_move(board, from, to, color) {
            moves.push(Move::simple(from, to));
        }
    }
}
