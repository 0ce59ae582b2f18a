//! Legal move generation.
//!
//! Jumps are generated first for every piece of the side to move. If any
//! exist the mandatory-capture rule applies and only jumps are returned;
//! otherwise every simple step is returned. Pieces are visited in ascending
//! position order and targets in ascending position order, so the output is
//! deterministic.

mod jumps;
mod steps;

use super::{Board, Color, MoveList};

/// All legal moves for `color`. Empty if `color` has no pieces or every
/// piece is blocked.
#[must_use]
pub fn generate_moves(board: &Board, color: Color) -> MoveList {
    let pieces = board.squares_for_player(color);

    let mut moves = MoveList::new();
    for &from in &pieces {
        jumps::generate_jumps(board, from, &mut moves);
    }
    if !moves.is_empty() {
        return moves;
    }

    for &from in &pieces {
        steps::generate_steps(board, from, color, &mut moves);
    }
    moves
}

impl Board {
    /// All legal moves for `color`, see [`generate_moves`]
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        generate_moves(self, color)
    }

    /// True if any piece of `color` has a capture available
    #[must_use]
    pub fn has_jump(&self, color: Color) -> bool {
        let mut moves = MoveList::new();
        self.squares_for_player(color).into_iter().any(|from| {
            jumps::generate_jumps(self, from, &mut moves);
            !moves.is_empty()
        })
    }

    /// Number of legal moves for `color`
    #[must_use]
    pub fn mobility(&self, color: Color) -> usize {
        self.legal_moves(color).len()
    }
}
