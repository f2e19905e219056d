//! Validated game rules and search settings.
//!
//! Both structs are built once at program start and passed by reference into
//! every board, evaluation and search call. Nothing here is global.

use crate::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_DEPTH, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE, MAX_DEPTH,
    MIN_BOARD_SIZE, MIN_WIN_LENGTH,
};
use crate::error::ConfigError;

/// Board side length and win length for one game.
///
/// Only [`Rules::new`] and [`Rules::default`] build one, so every `Rules`
/// value is within bounds:
///
/// ```compile_fail
/// use kinarow::config::Rules;
/// let rules = Rules { size: 4, win_length: 5 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    size: usize,
    win_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl Rules {
    pub fn new(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        if !(MIN_WIN_LENGTH..=size).contains(&win_length) {
            return Err(ConfigError::WinLength {
                win_length,
                min: MIN_WIN_LENGTH,
                max: size,
            });
        }
        Ok(Self { size, win_length })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Number of valid line origins along one axis.
    #[inline]
    pub fn span(&self) -> usize {
        self.size - self.win_length + 1
    }

    /// Total number of lines scanned by win detection and evaluation.
    pub fn line_count(&self) -> usize {
        2 * self.size * self.span() + 2 * self.span() * self.span()
    }
}

/// Settings fixed for the duration of one top-level search.
///
/// ```compile_fail
/// use kinarow::config::SearchConfig;
/// let config = SearchConfig { max_depth: 0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn new(max_depth: u32) -> Result<Self, ConfigError> {
        if max_depth == 0 || max_depth > MAX_DEPTH {
            return Err(ConfigError::Depth {
                depth: max_depth,
                max: MAX_DEPTH,
            });
        }
        Ok(Self { max_depth })
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
