//! Constants for board geometry, scoring, and search limits.
//!
//! The reference configuration is a 4x4 board where three in a row wins,
//! searched two plies deep. Board size and win length are runtime values
//! (see [`crate::config::Rules`]); the constants here only fix their bounds.

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length of the reference board.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Markers in a row needed to win on the reference board.
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// Smallest accepted side length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest accepted side length. Positions store this many rows and columns
/// regardless of the configured size.
pub const MAX_BOARD_SIZE: usize = 6;

/// Shortest accepted win length.
pub const MIN_WIN_LENGTH: usize = 3;

/// Cell storage for one position.
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search horizon in plies.
pub const DEFAULT_DEPTH: u32 = 2;

/// Deepest accepted search horizon.
pub const MAX_DEPTH: u32 = 10;

/// Sentinel magnitude for a decided game. Must exceed any heuristic sum.
pub const WIN_SCORE: i32 = 1000;

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Line held by one side only, one marker short of a win.
pub const NEAR_WIN_SCORE: i32 = 10;

/// Line held by a single marker of one side, otherwise empty.
pub const FOOTHOLD_SCORE: i32 = 1;

// =============================================================================
// Markers
// =============================================================================

/// Marker for the maximizing side.
pub const MARK_X: char = 'X';

/// Marker for the minimizing side.
pub const MARK_O: char = 'O';

/// Empty cell.
pub const MARK_EMPTY: char = '.';
