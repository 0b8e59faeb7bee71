//! Constants for board geometry, knight moves, and run defaults.
//!
//! The board size is a runtime parameter; everything here is either a fixed
//! property of the knight or a default used when the caller does not say
//! otherwise.

// =============================================================================
// Board Markers
// =============================================================================

/// Visitation marker for a square the knight has not reached.
pub const UNVISITED: i32 = -1;

/// Standard chessboard size (8x8).
pub const DEFAULT_BOARD_SIZE: usize = 8;

// =============================================================================
// Knight Offsets
// =============================================================================

/// The eight knight deltas as `(dx, dy)`.
///
/// Move generation walks this table in order, so with a fixed seed the
/// sequence of candidates (and the backtracking tie-break) is reproducible.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
    (1, -2),
    (2, -1),
    (1, 2),
    (2, 1),
];

// =============================================================================
// Trial Defaults
// =============================================================================

/// Default number of trials per threshold.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Coverage thresholds swept when none are given on the command line.
pub const DEFAULT_THRESHOLDS: [f64; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Default random steps before the hybrid strategy switches to backtracking.
pub const DEFAULT_STEP_BUDGET: usize = 48;

// =============================================================================
// Reporting
// =============================================================================

/// Line written between trials in a run log.
pub const TRIAL_DELIMITER: &str = "---";

/// Prefix of per-threshold log file names.
pub const LOG_FILE_PREFIX: &str = "knights_tour";
