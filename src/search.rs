//! Depth-limited minimax search.
//!
//! This module implements a full-width minimax with:
//! - Terminal detection before the horizon check (wins outrank heuristics)
//! - Depth-adjusted win scores, so faster wins and slower losses rank higher
//! - Static evaluation at the horizon via [`crate::eval::evaluate`]
//! - Row-major move order with first-found tie-breaking
//!
//! There is no pruning and no transposition table: every node up to the
//! horizon is visited, so results are identical to a naive minimax.

use std::time::{Duration, Instant};

use tracing::{debug, instrument, trace, warn};

use crate::config::{Rules, SearchConfig};
use crate::constants::WIN_SCORE;
use crate::error::SearchError;
use crate::eval::evaluate;
use crate::position::{Move, Player, Position, apply_move, is_draw, is_win, legal_moves};

/// Score of a position and the move that achieves it.
///
/// `best_move` is `None` for terminal positions and at the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

impl SearchResult {
    const fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Diagnostics for one top-level search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Positions visited, including the root.
    pub nodes: u64,
    pub elapsed: Duration,
}

struct Minimax<'a> {
    rules: &'a Rules,
    max_depth: u32,
    nodes: u64,
}

impl Minimax<'_> {
    fn node(&mut self, pos: &Position, depth: u32, maximizing: bool) -> SearchResult {
        self.nodes += 1;
        let d = depth as i32;

        if is_win(pos, self.rules, Player::X) {
            return SearchResult::leaf(WIN_SCORE - d);
        }
        if is_win(pos, self.rules, Player::O) {
            return SearchResult::leaf(-WIN_SCORE + d);
        }
        if is_draw(pos) {
            return SearchResult::leaf(0);
        }
        if depth >= self.max_depth {
            return SearchResult::leaf(evaluate(pos, self.rules));
        }

        let mover = if maximizing { Player::X } else { Player::O };
        let mut best = SearchResult {
            score: if maximizing { i32::MIN } else { i32::MAX },
            best_move: None,
        };

        for mv in legal_moves(pos) {
            let child = match apply_move(pos, self.rules, mv, mover) {
                Ok(child) => child,
                Err(e) => {
                    // legal_moves only yields empty in-bounds cells
                    debug_assert!(false, "legal move {mv} rejected: {e}");
                    warn!(%mv, error = %e, "skipping rejected move");
                    continue;
                }
            };
            let score = self.node(&child, depth + 1, !maximizing).score;
            if depth == 0 {
                trace!(%mv, score, "root move");
            }

            let better = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if better {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }
        }

        if best.best_move.is_none() {
            return SearchResult::leaf(0);
        }
        best
    }
}

/// Minimax value of `pos` entered at `depth`, searching until `max_depth`.
///
/// Exposed for callers that need to evaluate a node inside an existing tree;
/// `depth` is the ply distance from the root and feeds the win-score bias.
pub fn minimax(
    pos: &Position,
    rules: &Rules,
    depth: u32,
    maximizing: bool,
    max_depth: u32,
) -> SearchResult {
    Minimax {
        rules,
        max_depth,
        nodes: 0,
    }
    .node(pos, depth, maximizing)
}

/// Search `pos` to `config.max_depth()` plies for the side given by `maximizing`.
pub fn search(
    pos: &Position,
    rules: &Rules,
    config: &SearchConfig,
    maximizing: bool,
) -> Result<SearchResult, SearchError> {
    search_with_stats(pos, rules, config, maximizing).map(|(result, _)| result)
}

/// Like [`search`], also reporting node count and elapsed time.
#[instrument(level = "debug", skip_all, fields(depth = config.max_depth(), maximizing = maximizing))]
pub fn search_with_stats(
    pos: &Position,
    rules: &Rules,
    config: &SearchConfig,
    maximizing: bool,
) -> Result<(SearchResult, SearchStats), SearchError> {
    if pos.size() != rules.size() {
        return Err(SearchError::SizeMismatch {
            expected: rules.size(),
            found: pos.size(),
        });
    }

    let start = Instant::now();
    let mut engine = Minimax {
        rules,
        max_depth: config.max_depth(),
        nodes: 0,
    };
    let result = engine.node(pos, 0, maximizing);
    let stats = SearchStats {
        nodes: engine.nodes,
        elapsed: start.elapsed(),
    };

    debug!(
        score = result.score,
        best_move = ?result.best_move,
        nodes = stats.nodes,
        elapsed_ms = stats.elapsed.as_secs_f64() * 1000.0,
        "search finished"
    );
    Ok((result, stats))
}
