//! Per-iteration search reports.

use std::time::Duration;

/// One completed search iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u128,
    pub best_move: String,
}

impl SearchInfo {
    pub(crate) fn new(depth: u32, score: i32, nodes: u64, elapsed: Duration, best_move: String) -> Self {
        let time_ms = elapsed.as_millis();
        let nps = if time_ms > 0 {
            (u128::from(nodes) * 1000 / time_ms) as u64
        } else {
            nodes
        };
        SearchInfo {
            depth,
            score,
            nodes,
            nps,
            time_ms,
            best_move,
        }
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} score {} nodes {} nps {} time {} move {}",
            info.depth, info.score, info.nodes, info.nps, info.time_ms, info.best_move
        );
    }
}

/// Forwards iteration reports to the `log` facade at debug level.
#[cfg(feature = "logging")]
pub struct LogLogger;

#[cfg(feature = "logging")]
impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        log::debug!(
            "depth {} score {} nodes {} nps {} time {}ms move {}",
            info.depth,
            info.score,
            info.nodes,
            info.nps,
            info.time_ms,
            info.best_move
        );
    }
}
