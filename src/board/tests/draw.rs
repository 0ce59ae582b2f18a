//! Draw detection and game end.

use super::sq;
use crate::board::{
    Board, BoardBuilder, Color, GameStatus, Move, NO_CAPTURE_DRAW_MOVES,
    REPETITION_DRAW_THRESHOLD,
};

/// Kings on 1 and 32 shuffling back and forth
fn shuffle_moves() -> [Move; 4] {
    [
        Move::simple(sq(1), sq(5)),
        Move::simple(sq(32), sq(28)),
        Move::simple(sq(5), sq(1)),
        Move::simple(sq(28), sq(32)),
    ]
}

fn shuffle_board() -> Board {
    BoardBuilder::new()
        .king(sq(1), Color::Black)
        .king(sq(32), Color::White)
        .build()
}

#[test]
fn test_starting_position_is_not_a_draw() {
    let board = Board::new();
    assert!(!board.is_draw_state());
    assert!(!board.is_end_state(Color::Black));
    assert_eq!(board.status(Color::Black), GameStatus::InProgress);
}

#[test]
fn test_no_capture_counter_draw() {
    let board = BoardBuilder::starting_position()
        .moves_since_last_capture(NO_CAPTURE_DRAW_MOVES - 1)
        .build();
    assert!(!board.is_draw_state());

    let board = BoardBuilder::starting_position()
        .moves_since_last_capture(NO_CAPTURE_DRAW_MOVES + 1)
        .build();
    assert!(board.is_draw_state());
    assert_eq!(board.status(Color::White), GameStatus::Draw);
}

#[test]
fn test_counter_reaches_limit_through_play() {
    let mut board = BoardBuilder::starting_position()
        .moves_since_last_capture(NO_CAPTURE_DRAW_MOVES - 1)
        .build();
    board.move_piece(&Move::simple(sq(9), sq(13))).unwrap();
    assert_eq!(board.moves_since_last_capture(), NO_CAPTURE_DRAW_MOVES);
    assert!(board.is_draw_state());
}

#[test]
fn test_capture_resets_counter() {
    let mut board = BoardBuilder::new()
        .pawn(sq(15), Color::Black)
        .pawn(sq(1), Color::Black)
        .pawn(sq(18), Color::White)
        .moves_since_last_capture(30)
        .build();
    board.move_piece(&Move::jump(sq(18), sq(11), sq(15))).unwrap();
    assert_eq!(board.moves_since_last_capture(), 0);
}

#[test]
fn test_repetition_draw() {
    let mut board = shuffle_board();
    assert_eq!(board.repetition_count(), 0);

    let cycle = shuffle_moves();
    for (ply, mv) in cycle.iter().cycle().take(12).enumerate() {
        board.move_piece(mv).unwrap();
        assert!(!board.is_draw_state(), "drawn too early at ply {}", ply + 1);
    }
    // Every position of the cycle has now been seen three times
    assert_eq!(board.repetition_count(), REPETITION_DRAW_THRESHOLD - 1);

    board.move_piece(&cycle[0]).unwrap();
    assert_eq!(board.repetition_count(), REPETITION_DRAW_THRESHOLD);
    assert!(board.is_draw_state());
    assert_eq!(board.distinct_positions(), 4);
}

#[test]
fn test_repetition_draw_is_sticky() {
    let mut board = shuffle_board();
    let cycle = shuffle_moves();
    for mv in cycle.iter().cycle().take(13) {
        board.move_piece(mv).unwrap();
    }
    assert!(board.is_draw_state());

    // A fresh position does not undo the draw
    board.move_piece(&Move::simple(sq(32), sq(27))).unwrap();
    assert_eq!(board.repetition_count(), 1);
    assert!(board.is_draw_state());
}

#[test]
fn test_clone_carries_repetition_history() {
    let mut board = shuffle_board();
    for mv in shuffle_moves().iter().cycle().take(12) {
        board.move_piece(mv).unwrap();
    }
    let mut copy = board.clone();
    copy.move_piece(&shuffle_moves()[0]).unwrap();
    assert!(copy.is_draw_state());
    assert!(!board.is_draw_state());
}

#[test]
fn test_loss_by_no_pieces() {
    let board = Board::from_positions(&[], &[22]).unwrap();
    assert!(board.player_has_lost(Color::Black));
    assert!(!board.player_has_lost(Color::White));
    assert!(board.is_end_state(Color::Black));
    assert_eq!(board.status(Color::Black), GameStatus::Won(Color::White));
}

#[test]
fn test_loss_takes_priority_over_draw() {
    let board = BoardBuilder::new()
        .pawn(sq(4), Color::Black)
        .pawn(sq(8), Color::White)
        .pawn(sq(11), Color::White)
        .moves_since_last_capture(NO_CAPTURE_DRAW_MOVES)
        .build();
    assert!(board.is_draw_state());
    assert_eq!(board.status(Color::Black), GameStatus::Won(Color::White));
    assert_eq!(board.status(Color::White), GameStatus::Draw);
}
