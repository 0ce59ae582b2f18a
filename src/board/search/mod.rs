//! Search module implementing minimax with alpha-beta pruning.
//!
//! Features:
//! - Fixed-depth alpha-beta over lazily expanded [`SearchNode`]s
//! - Iterative deepening when a node or time budget is set
//! - External stop flag, node budget and deadline checked at every node
//! - Optional parallel root search that picks the same move as the serial one

mod alphabeta;
mod constants;
mod node;
mod params;
mod report;
mod smp;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use super::error::SearchError;
use super::{Board, Color, Move};
use alphabeta::{RootOutcome, SearchContext};

pub use constants::{DEFAULT_DEPTH, DRAW_SCORE, WIN_SCORE, WIN_THRESHOLD};
pub use node::{NodeState, SearchNode};
pub use params::SearchParams;
#[cfg(feature = "logging")]
pub use report::LogLogger;
pub use report::{SearchInfo, SearchLogger, StdoutLogger};

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchInfo) + Send + Sync>;

/// Configuration for a search operation.
#[derive(Clone)]
pub struct SearchConfig {
    /// Plies to search (at least 1)
    pub max_depth: u32,
    /// Time limit in milliseconds (0 = unlimited)
    pub time_limit_ms: u64,
    /// Node limit (0 = unlimited)
    pub node_limit: u64,
    /// Worker threads for the root split (1 = serial)
    pub threads: usize,
    /// Evaluation weights
    pub params: SearchParams,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_DEPTH,
            time_limit_ms: 0,
            node_limit: 0,
            threads: 1,
            params: SearchParams::default(),
            info_callback: None,
        }
    }
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            ..Default::default()
        }
    }

    /// Set a time limit; the search deepens iteratively until it runs out
    #[must_use]
    pub fn with_time(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    /// Set node limit
    #[must_use]
    pub fn with_nodes(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }

    fn has_limits(&self) -> bool {
        self.time_limit_ms > 0 || self.node_limit > 0
    }
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The move to play
    pub best_move: Move,
    /// Backed-up score from the searching side's point of view
    pub score: i32,
    /// Deepest fully completed depth (0 if none completed)
    pub depth: u32,
    /// Nodes visited over all iterations
    pub nodes: u64,
    /// True if a limit or the stop flag cut the search short
    pub aborted: bool,
}

fn check_preconditions(board: &Board, color: Color, depth: u32) -> Result<Vec<Move>, SearchError> {
    if depth == 0 {
        return Err(SearchError::ZeroDepth);
    }
    let recounted = board.recount();
    for c in Color::BOTH {
        if recounted.total(c) != board.piece_count(c)
            || recounted.kings[c.index()] != board.king_count(c)
        {
            return Err(SearchError::InconsistentCounts { color: c });
        }
    }
    let moves = board.legal_moves(color);
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves { color });
    }
    Ok(moves)
}

/// Search `depth` plies for `color` and return the best move.
///
/// Deterministic: equal-scoring moves resolve to the first in generation
/// order. The caller should check [`Board::is_end_state`] first; a side
/// with no legal moves yields [`SearchError::NoLegalMoves`].
pub fn choose_best_move(board: &Board, color: Color, depth: u32) -> Result<Move, SearchError> {
    let stop = AtomicBool::new(false);
    search(board, color, &SearchConfig::depth(depth), &stop).map(|result| result.best_move)
}

/// Unified search function that accepts a configuration.
///
/// Without limits this is a single fixed-depth pass. With a node or time
/// limit it deepens one ply at a time and returns the last depth that
/// finished; if not even depth 1 finishes, the first legal move is returned
/// with its static score.
pub fn search(
    board: &Board,
    color: Color,
    config: &SearchConfig,
    stop: &AtomicBool,
) -> Result<SearchResult, SearchError> {
    let legal = check_preconditions(board, color, config.max_depth)?;
    let start_time = Instant::now();

    let first_depth = if config.has_limits() { 1 } else { config.max_depth };
    let mut completed: Option<(RootOutcome, u32)> = None;
    let mut nodes = 0u64;
    let mut aborted = false;

    for depth in first_depth..=config.max_depth {
        let node_budget = if config.node_limit > 0 {
            let remaining = config.node_limit.saturating_sub(nodes);
            if remaining == 0 {
                aborted = true;
                break;
            }
            remaining
        } else {
            0
        };

        let (outcome, iter_nodes, iter_aborted) = if config.threads > 1 {
            let limits = smp::WorkerLimits {
                stop,
                start_time,
                time_limit_ms: config.time_limit_ms,
                node_limit: node_budget,
            };
            let result =
                smp::parallel_root(board, color, depth, config.threads, &config.params, &limits);
            (result.best, result.nodes, result.aborted)
        } else {
            let mut ctx = SearchContext::new(
                color,
                &config.params,
                stop,
                start_time,
                config.time_limit_ms,
                node_budget,
            );
            let mut root = SearchNode::root(board.clone(), depth, color);
            let best = ctx.search_root(&mut root);
            (best, ctx.nodes, ctx.aborted())
        };
        nodes += iter_nodes;

        if iter_aborted {
            aborted = true;
            break;
        }
        let Some(outcome) = outcome else {
            break;
        };

        report_iteration(config, depth, &outcome, nodes, start_time);
        let forced = outcome.score.abs() >= WIN_THRESHOLD;
        completed = Some((outcome, depth));
        if forced && config.has_limits() {
            // A forced result will not change with more depth
            break;
        }
    }

    let result = match completed {
        Some((outcome, depth)) => SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes,
            aborted,
        },
        None => {
            let fallback = legal[0].clone();
            let mut child = board.clone();
            child
                .move_piece(&fallback)
                .map_err(|_| SearchError::NoLegalMoves { color })?;
            SearchResult {
                best_move: fallback,
                score: child.evaluate(color, &config.params),
                depth: 0,
                nodes,
                aborted,
            }
        }
    };
    Ok(result)
}

fn report_iteration(
    config: &SearchConfig,
    depth: u32,
    outcome: &RootOutcome,
    nodes: u64,
    start_time: Instant,
) {
    let info = SearchInfo::new(
        depth,
        outcome.score,
        nodes,
        start_time.elapsed(),
        outcome.best_move.to_string(),
    );
    #[cfg(feature = "logging")]
    {
        log::debug!(
            "depth {} score {} nodes {} best {}",
            info.depth,
            info.score,
            info.nodes,
            info.best_move
        );
    }
    if let Some(callback) = &config.info_callback {
        callback(&info);
    }
}
