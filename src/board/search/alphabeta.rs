//! Minimax search with alpha-beta pruning.
//!
//! Scores are always from the root side's point of view: nodes where the
//! root side moves maximize, the others minimize. Children are searched in
//! move-generation order and a root move only replaces the current best if
//! it scores strictly higher, so ties go to the earliest move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::constants::{DRAW_SCORE, INFINITY, TIME_CHECK_INTERVAL, WIN_SCORE};
use super::node::SearchNode;
use super::SearchParams;
use crate::board::{Color, Move};

/// Best root move found by one fixed-depth pass
#[derive(Clone, Debug)]
pub(crate) struct RootOutcome {
    pub(crate) best_move: Move,
    pub(crate) score: i32,
}

/// Per-search bookkeeping: limits, node count and the root color
pub(crate) struct SearchContext<'a> {
    pub(crate) root_color: Color,
    pub(crate) params: &'a SearchParams,
    pub(crate) stop: &'a AtomicBool,
    pub(crate) start_time: Instant,
    pub(crate) time_limit_ms: u64,
    pub(crate) node_limit: u64,
    pub(crate) nodes: u64,
    /// Shared with sibling workers; set by whichever stops first
    halt: Option<&'a AtomicBool>,
    next_time_check: u64,
    aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        root_color: Color,
        params: &'a SearchParams,
        stop: &'a AtomicBool,
        start_time: Instant,
        time_limit_ms: u64,
        node_limit: u64,
    ) -> Self {
        SearchContext {
            root_color,
            params,
            stop,
            start_time,
            time_limit_ms,
            node_limit,
            nodes: 0,
            halt: None,
            next_time_check: 0,
            aborted: false,
        }
    }

    pub(crate) fn with_halt(mut self, halt: &'a AtomicBool) -> Self {
        self.halt = Some(halt);
        self
    }

    /// True once any limit has been hit. Sticky: a search that has been cut
    /// short stays cut short.
    pub(crate) fn should_stop(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        let halted = self.halt.is_some_and(|h| h.load(Ordering::Relaxed));
        if halted
            || self.stop.load(Ordering::Relaxed)
            || (self.node_limit > 0 && self.nodes >= self.node_limit)
        {
            self.aborted = true;
        } else if self.time_limit_ms > 0 && self.nodes >= self.next_time_check {
            self.next_time_check = self.nodes + TIME_CHECK_INTERVAL;
            let elapsed = self.start_time.elapsed().as_millis() as u64;
            self.aborted = elapsed >= self.time_limit_ms;
        }
        if self.aborted {
            if let Some(halt) = self.halt {
                halt.store(true, Ordering::Relaxed);
            }
        }
        #[cfg(feature = "logging")]
        {
            if self.aborted {
                log::trace!("search stopped after {} nodes", self.nodes);
            }
        }
        self.aborted
    }

    #[inline]
    pub(crate) fn aborted(&self) -> bool {
        self.aborted
    }

    /// Score of a node below which nothing is searched
    fn leaf_score(&self, node: &mut SearchNode, ply: u32) -> i32 {
        if node.moves().is_empty() {
            // Side to move has no pieces or no moves: it has lost
            let win = WIN_SCORE - ply as i32;
            return if node.to_move() == self.root_color {
                -win
            } else {
                win
            };
        }
        if node.board().is_draw_state() {
            return DRAW_SCORE;
        }
        node.board().evaluate(self.root_color, self.params)
    }

    /// Back up the minimax value of `node` within the window `[alpha, beta]`
    pub(crate) fn alpha_beta(
        &mut self,
        node: &mut SearchNode,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if node.is_leaf() {
            let score = self.leaf_score(node, ply);
            node.set_value(score);
            return score;
        }

        let maximizing = node.to_move() == self.root_color;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mut child in node.children() {
            if self.should_stop() {
                break;
            }
            let score = self.alpha_beta(&mut child, ply + 1, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        node.set_value(best);
        best
    }

    /// Search every root move to the root's depth and return the best one.
    ///
    /// Returns `None` if the root has no moves or the search was stopped
    /// before the first root move finished.
    pub(crate) fn search_root(&mut self, root: &mut SearchNode) -> Option<RootOutcome> {
        self.nodes += 1;
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<RootOutcome> = None;

        for mut child in root.children() {
            if self.should_stop() {
                break;
            }
            let score = self.alpha_beta(&mut child, 1, alpha, beta);
            if self.aborted {
                // Partial subtree scores are not trustworthy
                break;
            }
            if best.as_ref().map_or(true, |b| score > b.score) {
                if let Some(mv) = child.played() {
                    best = Some(RootOutcome {
                        best_move: mv.clone(),
                        score,
                    });
                }
            }
            alpha = alpha.max(score);
        }

        if let Some(outcome) = &best {
            root.set_value(outcome.score);
        }
        best
    }
}
