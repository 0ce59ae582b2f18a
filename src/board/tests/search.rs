//! Minimax search behaviour.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::sq;
use crate::board::{
    choose_best_move, search, Board, BoardBuilder, Color, Move, SearchConfig, SearchError,
    SearchInfo, SearchParams, WIN_SCORE, WIN_THRESHOLD,
};

fn run(board: &Board, color: Color, config: &SearchConfig) -> crate::board::SearchResult {
    let stop = AtomicBool::new(false);
    search(board, color, config, &stop).unwrap()
}

#[test]
fn test_zero_depth_is_rejected() {
    assert_eq!(
        choose_best_move(&Board::new(), Color::Black, 0),
        Err(SearchError::ZeroDepth)
    );
}

#[test]
fn test_no_legal_moves_is_rejected() {
    let board = Board::from_positions(&[], &[22]).unwrap();
    assert_eq!(
        choose_best_move(&board, Color::Black, 3),
        Err(SearchError::NoLegalMoves {
            color: Color::Black
        })
    );

    let blocked = Board::from_positions(&[4], &[8, 11]).unwrap();
    assert!(choose_best_move(&blocked, Color::Black, 3).is_err());
}

#[test]
fn test_inconsistent_counts_are_rejected() {
    let mut board = Board::new();
    board.counts.pawns[Color::White.index()] += 1;
    assert_eq!(
        choose_best_move(&board, Color::Black, 2),
        Err(SearchError::InconsistentCounts {
            color: Color::White
        })
    );
}

#[test]
fn test_single_legal_move_is_returned() {
    let board = Board::from_positions(&[1, 14], &[18, 32]).unwrap();
    for depth in [1, 4] {
        let mv = choose_best_move(&board, Color::Black, depth).unwrap();
        assert_eq!(mv, Move::jump(sq(14), sq(23), sq(18)));
    }
    let greedy = SearchParams::material_only().with_mobility(50);
    let result = run(&board, Color::Black, &SearchConfig::depth(1).with_params(greedy));
    assert_eq!(result.best_move, Move::jump(sq(14), sq(23), sq(18)));
}

#[test]
fn test_finds_winning_capture() {
    let board = BoardBuilder::new()
        .king(sq(14), Color::Black)
        .pawn(sq(18), Color::White)
        .build();
    let result = run(&board, Color::Black, &SearchConfig::depth(3));
    assert_eq!(result.best_move, Move::jump(sq(14), sq(23), sq(18)));
    // White has nothing left one ply below the root
    assert_eq!(result.score, WIN_SCORE - 1);
}

#[test]
fn test_avoids_hanging_a_piece() {
    // 15-18 walks into 22x15 and loses the only black piece; 15-19 is safe
    let board = Board::from_positions(&[15], &[22]).unwrap();

    // One ply deep both moves look alike and the first one wins the tie
    let shallow = run(&board, Color::Black, &SearchConfig::depth(1));
    assert_eq!(shallow.best_move, Move::simple(sq(15), sq(18)));

    let deep = run(&board, Color::Black, &SearchConfig::depth(2));
    assert_eq!(deep.best_move, Move::simple(sq(15), sq(19)));
    assert!(deep.score > -WIN_THRESHOLD);
}

#[test]
fn test_sees_its_own_loss() {
    // Black must step into a capture: every line loses
    let board = Board::from_positions(&[5], &[13, 14]).unwrap();
    let result = run(&board, Color::Black, &SearchConfig::depth(4));
    assert!(result.score <= -WIN_THRESHOLD, "score {}", result.score);
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::new();
    let first = choose_best_move(&board, Color::Black, 4).unwrap();
    for _ in 0..3 {
        assert_eq!(choose_best_move(&board, Color::Black, 4).unwrap(), first);
    }
    assert!(board.legal_moves(Color::Black).contains(&first));
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = Board::new();
    let _ = choose_best_move(&board, Color::White, 4).unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(board.distinct_positions(), 0);
    assert_eq!(board.moves_since_last_capture(), 0);
}

#[test]
fn test_parallel_matches_serial() {
    let mut board = Board::new();
    board.move_piece(&Move::simple(sq(11), sq(15))).unwrap();
    board.move_piece(&Move::simple(sq(23), sq(19))).unwrap();

    let serial = run(&board, Color::Black, &SearchConfig::depth(5));
    let parallel = run(&board, Color::Black, &SearchConfig::depth(5).with_threads(4));
    assert_eq!(parallel.best_move, serial.best_move);
    assert_eq!(parallel.score, serial.score);
    assert_eq!(parallel.depth, 5);
    assert!(!parallel.aborted);
}

#[test]
fn test_stop_flag_returns_fallback_move() {
    let board = Board::new();
    let stop = AtomicBool::new(true);
    let result = search(&board, Color::Black, &SearchConfig::depth(6), &stop).unwrap();
    assert!(result.aborted);
    assert_eq!(result.depth, 0);
    assert_eq!(result.best_move, board.legal_moves(Color::Black)[0]);
}

#[test]
fn test_node_limit_keeps_last_completed_depth() {
    let board = Board::new();
    let result = run(&board, Color::Black, &SearchConfig::depth(30).with_nodes(2_000));
    assert!(result.aborted);
    assert!(result.depth >= 1 && result.depth < 30);
    assert!(board.legal_moves(Color::Black).contains(&result.best_move));
}

#[test]
fn test_time_limit_is_respected() {
    let board = Board::new();
    let start = Instant::now();
    let result = run(&board, Color::White, &SearchConfig::depth(64).with_time(50));
    assert!(start.elapsed() < Duration::from_secs(2));
    assert!(result.depth >= 1);
    assert!(board.legal_moves(Color::White).contains(&result.best_move));
}

#[test]
fn test_info_callback_reports_each_depth() {
    let depths = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&depths);
    let config = SearchConfig::depth(3)
        .with_nodes(10_000_000)
        .with_info_callback(Arc::new(move |info: &SearchInfo| sink.lock().push(info.depth)));

    let result = run(&Board::new(), Color::Black, &config);
    assert_eq!(*depths.lock(), vec![1, 2, 3]);
    assert_eq!(result.depth, 3);
    assert!(!result.aborted);
}

#[test]
fn test_evaluation_is_antisymmetric() {
    let params = SearchParams::default().with_mobility(2);
    let board = Board::from_positions(&[1, 2, 9, 14, 22], &[18, 27, 31]).unwrap();
    assert_eq!(
        board.evaluate(Color::Black, &params),
        -board.evaluate(Color::White, &params)
    );
    assert_eq!(Board::new().evaluate(Color::Black, &params), 0);
}

#[test]
fn test_material_only_counts_pieces() {
    let params = SearchParams::material_only();
    let board = BoardBuilder::new()
        .king(sq(10), Color::Black)
        .pawn(sq(11), Color::Black)
        .pawn(sq(30), Color::White)
        .build();
    assert_eq!(
        board.evaluate(Color::Black, &params),
        params.king_value + params.pawn_value - params.pawn_value
    );
}
