//! Game-tree nodes.
//!
//! A node owns a board snapshot and expands lazily: legal moves are
//! generated on first request, and each child board is cloned and played
//! only while that child is being searched.

use crate::board::{Board, Color, Move, MoveList};

/// Where a node is in its life cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// Moves not generated yet
    Unexpanded,
    /// Moves generated, no value backed up yet
    Expanded,
    /// Value backed up
    Evaluated(i32),
}

#[derive(Clone, Debug)]
pub struct SearchNode {
    board: Board,
    played: Option<Move>,
    depth: u32,
    to_move: Color,
    moves: Option<MoveList>,
    value: Option<i32>,
}

impl SearchNode {
    /// Root node: `to_move` plays next and `depth` plies remain
    #[must_use]
    pub fn root(board: Board, depth: u32, to_move: Color) -> Self {
        SearchNode {
            board,
            played: None,
            depth,
            to_move,
            moves: None,
            value: None,
        }
    }

    /// Child reached by playing `mv` here, or `None` if the move cannot be
    /// applied to this board.
    #[must_use]
    pub fn child(&self, mv: &Move) -> Option<SearchNode> {
        let mut board = self.board.clone();
        board.move_piece(mv).ok()?;
        Some(SearchNode {
            board,
            played: Some(mv.clone()),
            depth: self.depth.saturating_sub(1),
            to_move: self.to_move.opponent(),
            moves: None,
            value: None,
        })
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this node (`None` at the root)
    #[inline]
    #[must_use]
    pub fn played(&self) -> Option<&Move> {
        self.played.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn state(&self) -> NodeState {
        match (self.value, &self.moves) {
            (Some(value), _) => NodeState::Evaluated(value),
            (None, Some(_)) => NodeState::Expanded,
            (None, None) => NodeState::Unexpanded,
        }
    }

    /// Legal moves for the side to move, generated on first call
    pub fn moves(&mut self) -> &MoveList {
        let board = &self.board;
        let to_move = self.to_move;
        self.moves.get_or_insert_with(|| board.legal_moves(to_move))
    }

    /// No further search below this node: depth exhausted, the side to move
    /// has lost, or the game is drawn.
    pub fn is_leaf(&mut self) -> bool {
        self.depth == 0 || self.board.is_draw_state() || self.moves().is_empty()
    }

    /// Children in move-generation order, built one at a time
    pub fn children(&mut self) -> impl Iterator<Item = SearchNode> + '_ {
        self.moves();
        let parent: &SearchNode = self;
        parent
            .moves
            .iter()
            .flatten()
            .filter_map(move |mv| parent.child(mv))
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = Some(value);
    }

    /// Give the board back, dropping the node
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
