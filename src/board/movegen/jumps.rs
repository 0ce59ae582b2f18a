//! Capture chains.
//!
//! A chain is grown depth-first from the moving piece's square. Captured
//! pieces stay on the board until the move is applied, so each step skips
//! squares already captured in this chain and never lands on a square the
//! chain has already visited. Only maximal chains become moves.

use crate::board::types::is_on_board;
use crate::board::validator::jumped_square;
use crate::board::{Board, Move, MoveList, Piece, Square};

struct JumpChain {
    origin: Square,
    path: Vec<Square>,
    captured: Vec<Square>,
}

impl JumpChain {
    fn visited(&self, sq: Square) -> bool {
        sq == self.origin || self.path.contains(&sq)
    }
}

/// Every maximal capture sequence for the piece on `from`
pub(super) fn generate_jumps(board: &Board, from: Square, moves: &mut MoveList) {
    let piece = board.piece(from);
    if piece.is_empty() {
        return;
    }
    let mut chain = JumpChain {
        origin: from,
        path: Vec::new(),
        captured: Vec::new(),
    };
    extend_chain(board, piece, from, &mut chain, moves);
}

fn extend_chain(
    board: &Board,
    piece: Piece,
    at: Square,
    chain: &mut JumpChain,
    moves: &mut MoveList,
) {
    let mut extended = false;

    for candidate in at.jump_candidates() {
        if !is_on_board(candidate) {
            continue;
        }
        let Ok(landing) = Square::new(candidate) else {
            continue;
        };
        if chain.visited(landing) {
            continue;
        }
        let Some(over) = jumped_square(board, piece, at, landing) else {
            continue;
        };
        if chain.captured.contains(&over) {
            continue;
        }

        // A pawn reaching its crowning row continues the chain as a king
        let next = match piece {
            Piece::Pawn(color) if landing.row() == color.crowning_row() => piece.crowned(),
            _ => piece,
        };

        chain.path.push(landing);
        chain.captured.push(over);
        extend_chain(board, next, landing, chain, moves);
        chain.path.pop();
        chain.captured.pop();
        extended = true;
    }

    if !extended {
        if let Some(mv) = Move::from_chain(chain.origin, &chain.path, &chain.captured) {
            moves.push(mv);
        }
    }
}
