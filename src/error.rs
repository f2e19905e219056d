//! Error types for board, configuration and search operations.
//!
//! Library functions return these typed errors; the binary and the game loop
//! wrap them in `anyhow` with context.

use crate::position::Move;

/// Errors raised when a move cannot be applied to a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move {mv} is outside the {size}x{size} board")]
    OutOfBounds { mv: Move, size: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Move),
}

/// Errors raised while validating rules or search settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} is out of range ({min}-{max})")]
    BoardSize { size: usize, min: usize, max: usize },

    #[error("win length {win_length} is out of range ({min}-{max})")]
    WinLength {
        win_length: usize,
        min: usize,
        max: usize,
    },

    #[error("search depth {depth} is out of range (1-{max})")]
    Depth { depth: u32, max: u32 },
}

/// Errors raised while parsing a textual position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognised cell {ch:?} in row {row}")]
    BadCell { row: usize, ch: char },
}

/// Errors raised at the search entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("position is {found}x{found} but the rules expect {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
}
