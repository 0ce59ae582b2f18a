use super::{Board, Color};

impl Board {
    /// Count leaf positions `depth` plies ahead with `color` to move.
    ///
    /// Every distinct capture path counts as its own move, matching the
    /// published checkers perft figures.
    #[must_use]
    pub fn perft(&self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            let mut child = self.clone();
            if child.move_piece(m).is_ok() {
                nodes += child.perft(color.opponent(), depth - 1);
            }
        }

        nodes
    }
}
