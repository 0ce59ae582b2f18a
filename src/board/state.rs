use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{MoveError, SquareError};
use super::{Color, GameStatus, Move, Piece, Square, NUM_SQUARES};

/// Consecutive non-capturing moves after which the game is drawn
pub const NO_CAPTURE_DRAW_MOVES: u32 = 50;

/// Times a position must be recorded before the game is drawn. Positions are
/// recorded after each move, so 4 means the position came back three times.
pub const REPETITION_DRAW_THRESHOLD: u32 = 4;

/// Full-board contents, used as the repetition key
pub type Snapshot = [Piece; NUM_SQUARES];

#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<Snapshot, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, snapshot: &Snapshot) -> u32 {
        self.counts.get(snapshot).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, snapshot: Snapshot) -> u32 {
        let entry = self.counts.entry(snapshot).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }

    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }
}

/// Pawn and king totals per color, indexed by `Color::index()`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieceCounts {
    pub pawns: [u32; 2],
    pub kings: [u32; 2],
}

impl PieceCounts {
    #[must_use]
    pub fn total(&self, color: Color) -> u32 {
        self.pawns[color.index()] + self.kings[color.index()]
    }
}

/// What a presentation layer needs to redraw after a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    /// Squares emptied by captures, in capture order
    pub captured: Vec<Square>,
    /// The piece now standing on `to`
    pub piece: Piece,
    /// True if this move crowned the piece
    pub promoted: bool,
}

/// Authoritative game state.
///
/// Running pawn/king counters are updated on every placement and removal and
/// always agree with the square contents; [`Board::recount`] exists only to
/// check that.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: Snapshot,
    pub(crate) counts: PieceCounts,
    pub(crate) moves_since_last_capture: u32,
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) repetition_draw: bool,
}

impl Board {
    /// Standard starting position: Black on 1-12, White on 21-32
    pub fn new() -> Self {
        let mut board = Board::empty();
        for sq in Square::all() {
            match sq.position() {
                1..=12 => board.set_occupying_piece(sq, Piece::Pawn(Color::Black)),
                21..=32 => board.set_occupying_piece(sq, Piece::Pawn(Color::White)),
                _ => {}
            }
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [Piece::Empty; NUM_SQUARES],
            counts: PieceCounts::default(),
            moves_since_last_capture: 0,
            repetition_counts: RepetitionTable::new(),
            repetition_draw: false,
        }
    }

    /// Board with black pawns on `black` and white pawns on `white`. A
    /// position listed for both colors gets the black pawn.
    pub fn from_positions(black: &[i32], white: &[i32]) -> Result<Self, SquareError> {
        for &position in black.iter().chain(white) {
            Square::new(position)?;
        }
        let mut board = Board::empty();
        for sq in Square::all() {
            let position = i32::from(sq.position());
            if black.contains(&position) {
                board.set_occupying_piece(sq, Piece::Pawn(Color::Black));
            } else if white.contains(&position) {
                board.set_occupying_piece(sq, Piece::Pawn(Color::White));
            }
        }
        Ok(board)
    }

    /// Piece on a position number (1-32)
    pub fn get_piece(&self, position: i32) -> Result<Piece, SquareError> {
        Ok(self.piece(Square::new(position)?))
    }

    #[inline]
    #[must_use]
    pub fn piece(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    #[must_use]
    pub fn pieces(&self, squares: &[Square]) -> Vec<Piece> {
        squares.iter().map(|&sq| self.piece(sq)).collect()
    }

    /// Square contents in position order
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.squares
    }

    /// Put `piece` on `sq` and count it.
    ///
    /// Callers place onto empty squares. If a piece is already there it is
    /// uncounted first, so the counters stay consistent either way.
    pub fn set_occupying_piece(&mut self, sq: Square, piece: Piece) {
        let previous = self.squares[sq.index()];
        debug_assert!(
            previous.is_empty(),
            "placing {piece} on occupied square {sq} ({previous})"
        );
        self.uncount(previous);
        self.squares[sq.index()] = piece;
        self.count(piece);
    }

    /// Empty `sq` and return what stood there
    pub fn remove_piece(&mut self, sq: Square) -> Result<Piece, MoveError> {
        let piece = self.squares[sq.index()];
        if piece.is_empty() {
            return Err(MoveError::EmptySquareRemoval { square: sq });
        }
        self.uncount(piece);
        self.squares[sq.index()] = Piece::Empty;
        Ok(piece)
    }

    fn counter_for(&mut self, piece: Piece) -> Option<&mut u32> {
        match piece {
            Piece::Empty => None,
            Piece::Pawn(color) => Some(&mut self.counts.pawns[color.index()]),
            Piece::King(color) => Some(&mut self.counts.kings[color.index()]),
        }
    }

    fn count(&mut self, piece: Piece) {
        if let Some(counter) = self.counter_for(piece) {
            *counter += 1;
        }
    }

    fn uncount(&mut self, piece: Piece) {
        if let Some(counter) = self.counter_for(piece) {
            *counter = counter.saturating_sub(1);
        }
    }

    /// Apply a move that is already known to be legal.
    ///
    /// Picks the piece up, removes every captured piece (resetting the
    /// no-capture counter) or bumps the counter for a simple move, places
    /// the piece, crowns it if it reached its crowning row, and records
    /// the resulting position. Geometry is not re-checked; use
    /// [`Board::apply_move`] for untrusted input. Fails without mutating if
    /// the start or a captured square is empty.
    pub fn move_piece(&mut self, mv: &Move) -> Result<MoveOutcome, MoveError> {
        let from = mv.from();
        let to = mv.to();
        if self.piece(from).is_empty() {
            return Err(MoveError::EmptySquareRemoval { square: from });
        }
        let captured = mv.jumped_positions().unwrap_or(&[]);
        if let Some(&square) = captured.iter().find(|&&sq| self.piece(sq).is_empty()) {
            return Err(MoveError::EmptySquareRemoval { square });
        }

        let piece = self.remove_piece(from)?;
        if mv.is_jump() {
            for &sq in captured {
                self.remove_piece(sq)?;
            }
            self.moves_since_last_capture = 0;
        } else {
            self.moves_since_last_capture += 1;
        }

        // A pawn that touches its crowning row anywhere along the path is a king
        let promoted = match piece {
            Piece::Pawn(color) => std::iter::once(&to)
                .chain(mv.intermediate_positions())
                .any(|sq| sq.row() == color.crowning_row()),
            _ => false,
        };
        let placed = if promoted { piece.crowned() } else { piece };
        self.set_occupying_piece(to, placed);
        self.record_position();

        Ok(MoveOutcome {
            from,
            to,
            captured: captured.to_vec(),
            piece: placed,
            promoted,
        })
    }

    /// Check `mv` against the legal moves for `color`, then apply it.
    pub fn apply_move(&mut self, mv: &Move, color: Color) -> Result<MoveOutcome, MoveError> {
        if !self.legal_moves(color).contains(mv) {
            return Err(MoveError::IllegalMove {
                from: mv.from(),
                to: mv.to(),
            });
        }
        self.move_piece(mv)
    }

    /// First legal move for `color` going from `from` to `to`
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square, color: Color) -> Option<Move> {
        self.legal_moves(color)
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
    }

    fn record_position(&mut self) {
        let count = self.repetition_counts.increment(self.squares);
        if count >= REPETITION_DRAW_THRESHOLD {
            self.repetition_draw = true;
        }
    }

    /// Squares holding a piece of `color`, in position order
    #[must_use]
    pub fn squares_for_player(&self, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.piece(sq).is_color(color))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn pawn_count(&self, color: Color) -> u32 {
        self.counts.pawns[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn king_count(&self, color: Color) -> u32 {
        self.counts.kings[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.counts.total(color)
    }

    #[inline]
    #[must_use]
    pub fn counts(&self) -> PieceCounts {
        self.counts
    }

    #[inline]
    #[must_use]
    pub fn moves_since_last_capture(&self) -> u32 {
        self.moves_since_last_capture
    }

    /// Times the current position has been recorded
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetition_counts.get(&self.squares)
    }

    /// Number of distinct positions recorded so far
    #[must_use]
    pub fn distinct_positions(&self) -> usize {
        self.repetition_counts.len()
    }

    /// Count pieces from the square contents, ignoring the running counters
    #[must_use]
    pub fn recount(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for piece in self.squares {
            match piece {
                Piece::Empty => {}
                Piece::Pawn(color) => counts.pawns[color.index()] += 1,
                Piece::King(color) => counts.kings[color.index()] += 1,
            }
        }
        counts
    }

    /// Fifty moves without a capture, or a position recorded four times
    #[must_use]
    pub fn is_draw_state(&self) -> bool {
        self.moves_since_last_capture >= NO_CAPTURE_DRAW_MOVES || self.repetition_draw
    }

    /// `color` has no pieces left or none of them can move
    #[must_use]
    pub fn player_has_lost(&self, color: Color) -> bool {
        self.piece_count(color) == 0 || self.legal_moves(color).is_empty()
    }

    #[must_use]
    pub fn is_end_state(&self, color: Color) -> bool {
        self.player_has_lost(color) || self.is_draw_state()
    }

    /// Game status with `to_move` about to play
    #[must_use]
    pub fn status(&self, to_move: Color) -> GameStatus {
        if self.player_has_lost(to_move) {
            GameStatus::Won(to_move.opponent())
        } else if self.is_draw_state() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Boards are equal when every square matches and the per-color totals
/// match. Counters and history are not compared.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && Color::BOTH
                .iter()
                .all(|&c| self.piece_count(c) == other.piece_count(c))
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.squares.hash(state);
        for color in Color::BOTH {
            self.piece_count(color).hash(state);
        }
    }
}

/// Row 0 at the top; light squares print as spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8i8 {
            for col in 0..8i8 {
                let c = Square::from_coords(row, col).map_or(' ', |sq| self.piece(sq).to_char());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
