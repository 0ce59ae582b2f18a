/// Static evaluation weights. All weights are non-negative, so more material
/// or mobility for a side never lowers that side's score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub pawn_value: i32,
    pub king_value: i32,
    /// Per row a pawn has advanced from its own back rank
    pub advancement_bonus: i32,
    /// Per pawn still on its own back rank (guards the crowning squares)
    pub back_rank_bonus: i32,
    /// Per legal move; 0 skips the move generation at leaves
    pub mobility_weight: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            pawn_value: 100,
            king_value: 160,
            advancement_bonus: 3,
            back_rank_bonus: 8,
            mobility_weight: 0,
        }
    }
}

impl SearchParams {
    /// Material only: pawns and kings, nothing positional
    #[must_use]
    pub fn material_only() -> Self {
        SearchParams {
            advancement_bonus: 0,
            back_rank_bonus: 0,
            mobility_weight: 0,
            ..SearchParams::default()
        }
    }

    #[must_use]
    pub fn with_mobility(mut self, weight: i32) -> Self {
        self.mobility_weight = weight.max(0);
        self
    }
}
