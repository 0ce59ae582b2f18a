//! Search constants.

/// Bound used for the initial alpha-beta window
pub const INFINITY: i32 = 1_000_000;

/// Score for a won position at the root. Wins found sooner score higher:
/// a win `ply` plies away scores `WIN_SCORE - ply`.
pub const WIN_SCORE: i32 = 100_000;

/// Scores with absolute value >= this are forced wins or losses
pub const WIN_THRESHOLD: i32 = WIN_SCORE - 1_000;

/// Draws score zero from both sides
pub const DRAW_SCORE: i32 = 0;

/// The clock is read at most once per this many nodes
pub const TIME_CHECK_INTERVAL: u64 = 1024;

/// Depth used when a config leaves it unset
pub const DEFAULT_DEPTH: u32 = 6;
