//! Engine self-play from the command line.
//!
//! usage: checkers_engine [depth] [max_plies] [seed]
//!
//! A few random opening plies (chosen with `seed`) vary the games; after
//! that both sides play the engine's best move at `depth`.

use std::env;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::prelude::*;

use checkers_engine::board::{
    search, Board, Color, SearchConfig, SearchInfo, SearchLogger, StdoutLogger, DEFAULT_DEPTH,
};

const RANDOM_OPENING_PLIES: usize = 2;

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(default)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u32 = parse_arg(&args, 1, DEFAULT_DEPTH);
    let max_plies: usize = parse_arg(&args, 2, 200);
    let seed: u64 = parse_arg(&args, 3, 0);

    let mut rng = StdRng::seed_from_u64(seed);
    let config = SearchConfig::depth(depth.max(1)).with_info_callback(Arc::new(
        |info: &SearchInfo| StdoutLogger.info(info),
    ));
    let stop = AtomicBool::new(false);

    let mut board = Board::new();
    let mut to_move = Color::Black;
    let mut ply = 0;

    println!("{board}");
    while ply < max_plies && !board.is_end_state(to_move) {
        let mv = if ply < RANDOM_OPENING_PLIES {
            let moves = board.legal_moves(to_move);
            match moves.choose(&mut rng) {
                Some(mv) => mv.clone(),
                None => break,
            }
        } else {
            match search(&board, to_move, &config, &stop) {
                Ok(result) => result.best_move,
                Err(err) => {
                    eprintln!("search failed: {err}");
                    break;
                }
            }
        };

        if let Err(err) = board.apply_move(&mv, to_move) {
            eprintln!("engine produced a bad move {mv}: {err}");
            break;
        }
        ply += 1;
        println!("{ply}. {to_move} {mv}");
        println!("{board}");
        to_move = to_move.opponent();
    }

    println!(
        "result: {} after {} plies (black {}, white {})",
        board.status(to_move),
        ply,
        board.piece_count(Color::Black),
        board.piece_count(Color::White)
    );
}
