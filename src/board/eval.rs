use super::search::SearchParams;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Static score of the position from `perspective`'s point of view.
    ///
    /// Positive means `perspective` is better off. Deterministic and
    /// symmetric: `evaluate(c) == -evaluate(c.opponent())`.
    #[must_use]
    pub fn evaluate(&self, perspective: Color, params: &SearchParams) -> i32 {
        self.side_score(perspective, params) - self.side_score(perspective.opponent(), params)
    }

    fn side_score(&self, color: Color, params: &SearchParams) -> i32 {
        let mut score = self.pawn_count(color) as i32 * params.pawn_value
            + self.king_count(color) as i32 * params.king_value;

        if params.advancement_bonus != 0 || params.back_rank_bonus != 0 {
            let home_row = color.opponent().crowning_row();
            for sq in Square::all() {
                if self.piece(sq) != Piece::Pawn(color) {
                    continue;
                }
                let advanced = (sq.row() as i32 - home_row as i32).abs();
                score += advanced * params.advancement_bonus;
                if advanced == 0 {
                    score += params.back_rank_bonus;
                }
            }
        }

        if params.mobility_weight != 0 {
            score += self.mobility(color) as i32 * params.mobility_weight;
        }

        score
    }
}
