//! Kinarow: depth-limited minimax for k-in-a-row.
//!
//! This crate plays a generalised tic-tac-toe on an NxN board where K markers
//! in a row, column or diagonal win. The reference game is 4x4 with K = 3.
//!
//! ## Modules
//!
//! - [`constants`] - Board bounds, scores and search limits
//! - [`config`] - Validated rules and search settings
//! - [`position`] - Board model, line enumeration and move application
//! - [`eval`] - Static line-based heuristic
//! - [`search`] - Full-width minimax
//! - [`game`] - Interactive play, self-play and analysis
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use kinarow::config::{Rules, SearchConfig};
//! use kinarow::position::{Move, Player, Position, apply_move};
//! use kinarow::search::search;
//!
//! let rules = Rules::default();
//! let pos = apply_move(&Position::empty(&rules), &rules, Move::new(1, 1), Player::X).unwrap();
//!
//! // O replies as the minimizing side
//! let result = search(&pos, &rules, &SearchConfig::default(), false).unwrap();
//! println!("O plays {:?} (score {})", result.best_move, result.score);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod eval;
pub mod game;
pub mod position;
pub mod search;
