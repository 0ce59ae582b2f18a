//! Parallel root search.
//!
//! Root moves are handed out to scoped worker threads one at a time. Each
//! child is searched with a full window, so its value is exact and does not
//! depend on which worker took it or in what order. The best move is then
//! picked in generation order, giving the same answer as the serial search.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

use parking_lot::Mutex;

use super::alphabeta::{RootOutcome, SearchContext};
use super::constants::INFINITY;
use super::node::SearchNode;
use super::SearchParams;
use crate::board::{Board, Color};

/// Result of one parallel fixed-depth pass
pub(crate) struct ParallelOutcome {
    pub(crate) best: Option<RootOutcome>,
    pub(crate) nodes: u64,
    pub(crate) aborted: bool,
}

/// Limits shared by every worker
pub(crate) struct WorkerLimits<'a> {
    pub(crate) stop: &'a AtomicBool,
    pub(crate) start_time: Instant,
    pub(crate) time_limit_ms: u64,
    /// Applies to each worker separately
    pub(crate) node_limit: u64,
}

pub(crate) fn parallel_root(
    board: &Board,
    color: Color,
    depth: u32,
    threads: usize,
    params: &SearchParams,
    limits: &WorkerLimits<'_>,
) -> ParallelOutcome {
    let mut root = SearchNode::root(board.clone(), depth, color);
    let moves = root.moves().clone();

    let next = AtomicUsize::new(0);
    let total_nodes = AtomicU64::new(0);
    let halt = AtomicBool::new(false);
    let scores: Mutex<Vec<Option<i32>>> = Mutex::new(vec![None; moves.len()]);

    let workers = threads.clamp(1, moves.len().max(1));
    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                let mut ctx = SearchContext::new(
                    color,
                    params,
                    limits.stop,
                    limits.start_time,
                    limits.time_limit_ms,
                    limits.node_limit,
                )
                .with_halt(&halt);

                loop {
                    let idx = next.fetch_add(1, Ordering::Relaxed);
                    let Some(mv) = moves.get(idx) else {
                        break;
                    };
                    let Some(mut child) = root.child(mv) else {
                        continue;
                    };
                    let score = ctx.alpha_beta(&mut child, 1, -INFINITY, INFINITY);
                    if ctx.aborted() {
                        break;
                    }
                    scores.lock()[idx] = Some(score);
                }

                total_nodes.fetch_add(ctx.nodes, Ordering::Relaxed);
            });
        }
    });

    let scores = scores.into_inner();
    let mut best: Option<RootOutcome> = None;
    for (mv, score) in moves.iter().zip(&scores) {
        let Some(score) = *score else {
            continue;
        };
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(RootOutcome {
                best_move: mv.clone(),
                score,
            });
        }
    }

    ParallelOutcome {
        best,
        nodes: total_nodes.load(Ordering::Relaxed),
        aborted: halt.load(Ordering::Relaxed) || scores.iter().any(Option::is_none),
    }
}
