pub mod board;

pub use board::{Board, Color, GameStatus, Move, Piece, Square};
