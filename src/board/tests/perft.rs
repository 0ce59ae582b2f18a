//! Perft (performance test) for move generation correctness.

use super::sq;
use crate::board::{Board, BoardBuilder, Color};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    board: fn() -> Board,
    to_move: Color,
    depths: &'static [(usize, u64)],
}

fn lone_kings() -> Board {
    BoardBuilder::new()
        .king(sq(1), Color::Black)
        .king(sq(32), Color::White)
        .build()
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        board: Board::new,
        to_move: Color::Black,
        depths: &[(1, 7), (2, 49), (3, 302), (4, 1469), (5, 7361)],
    },
    TestPosition {
        // Each king has two moves from its corner
        name: "Lone Kings",
        board: lone_kings,
        to_move: Color::Black,
        depths: &[(1, 2), (2, 4)],
    },
];

#[test]
fn test_perft_positions() {
    for position in TEST_POSITIONS {
        let board = (position.board)();
        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = board.perft(position.to_move, depth);
            assert_eq!(
                nodes, expected,
                "{} depth {}: got {}, expected {} ({:?})",
                position.name,
                depth,
                nodes,
                expected,
                start.elapsed()
            );
        }
    }
}

#[test]
fn test_perft_depth_zero() {
    assert_eq!(Board::new().perft(Color::White, 0), 1);
}

#[test]
fn test_perft_does_not_touch_board() {
    let board = Board::new();
    board.perft(Color::Black, 3);
    assert_eq!(board, Board::new());
    assert_eq!(board.distinct_positions(), 0);
}
