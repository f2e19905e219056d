//! Turn-taking front ends around the search engine.
//!
//! - [`GameSession`] runs an interactive game: the human plays X and moves
//!   first, the engine answers as O.
//! - [`self_play`] lets the engine play both sides after a random opening.
//! - [`analyze`] reports the engine's choice for a single position.
//!
//! All of them talk through generic readers and writers so they can be driven
//! from stdin/stdout or from in-memory buffers.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::config::{Rules, SearchConfig};
use crate::position::{Move, Player, Position, apply_move, is_draw, legal_moves, winner};
use crate::search::{SearchResult, search, search_with_stats};

/// How an interactive game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWin,
    EngineWin,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::HumanWin => write!(f, "You win!"),
            Outcome::EngineWin => write!(f, "The engine wins!"),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// `Some(winner)` once the game is over, with `Some(None)` for a draw.
fn finished(pos: &Position, rules: &Rules) -> Option<Option<Player>> {
    match winner(pos, rules) {
        Some(p) => Some(Some(p)),
        None if is_draw(pos) => Some(None),
        None => None,
    }
}

/// Interactive human (X) versus engine (O) game.
pub struct GameSession {
    rules: Rules,
    config: SearchConfig,
    position: Position,
}

impl GameSession {
    pub fn new(rules: Rules, config: SearchConfig) -> Self {
        Self::with_position(rules, config, Position::empty(&rules))
    }

    /// Resume from `position` with the human to move.
    pub fn with_position(rules: Rules, config: SearchConfig, position: Position) -> Self {
        Self {
            rules,
            config,
            position,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Play until someone wins or the board fills up.
    pub fn play<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Outcome> {
        writeln!(out, "Game on! You play X and move first.")?;
        writeln!(out, "\n{}", self.position)?;

        loop {
            let mv = self.human_move(input, out)?;
            self.position = apply_move(&self.position, &self.rules, mv, Player::X)?;
            writeln!(out, "\n{}", self.position)?;
            if let Some(result) = self.outcome() {
                writeln!(out, "{result}")?;
                return Ok(result);
            }

            self.engine_move(out)?;
            writeln!(out, "\n{}", self.position)?;
            if let Some(result) = self.outcome() {
                writeln!(out, "{result}")?;
                return Ok(result);
            }
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        finished(&self.position, &self.rules).map(|w| match w {
            Some(Player::X) => Outcome::HumanWin,
            Some(Player::O) => Outcome::EngineWin,
            None => Outcome::Draw,
        })
    }

    /// Prompt until the human enters an empty, in-bounds cell.
    fn human_move<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<Move> {
        let last = self.rules.size() - 1;
        loop {
            let Some(row) = prompt_number(input, out, &format!("Row (0-{last}): "))? else {
                writeln!(out, "Input error: enter a whole number.")?;
                continue;
            };
            let Some(col) = prompt_number(input, out, &format!("Column (0-{last}): "))? else {
                writeln!(out, "Input error: enter a whole number.")?;
                continue;
            };

            let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
                let n = self.rules.size();
                writeln!(
                    out,
                    "Invalid move: move ({row}, {col}) is outside the {n}x{n} board. Try again."
                )?;
                continue;
            };
            let mv = Move::new(r, c);
            match apply_move(&self.position, &self.rules, mv, Player::X) {
                Ok(_) => return Ok(mv),
                Err(e) => writeln!(out, "Invalid move: {e}. Try again.")?,
            }
        }
    }

    fn engine_move<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "\nThe engine is thinking...")?;
        let (result, stats) = search_with_stats(&self.position, &self.rules, &self.config, false)?;
        let Some(mv) = result.best_move else {
            bail!("engine found no move in a live position");
        };

        writeln!(out, "  score: {}", result.score)?;
        writeln!(out, "  move:  {mv}")?;
        writeln!(out, "  depth: {}", self.config.max_depth())?;
        writeln!(out, "  nodes: {}", stats.nodes)?;
        writeln!(out, "  time:  {:.4} s", stats.elapsed.as_secs_f64())?;

        self.position = apply_move(&self.position, &self.rules, mv, Player::O)?;
        Ok(())
    }
}

/// Read one line and parse it as an integer. `None` means not a number;
/// range checks are left to the caller.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<i64>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read move")?;
    if n == 0 {
        bail!("input closed before the game finished");
    }
    Ok(line.trim().parse().ok())
}

// =============================================================================
// Self-play
// =============================================================================

/// Moves and result of an engine-versus-engine game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPlayRecord {
    pub moves: Vec<(Player, Move)>,
    pub winner: Option<Player>,
    pub position: Position,
}

/// Engine plays both sides. X opens on a random cell drawn from `rng`.
pub fn self_play<W: Write>(
    rules: &Rules,
    config: &SearchConfig,
    rng: &mut fastrand::Rng,
    out: &mut W,
) -> Result<SelfPlayRecord> {
    let mut pos = Position::empty(rules);
    let mut moves = Vec::new();

    let opening = legal_moves(&pos);
    let mv = opening[rng.usize(..opening.len())];
    pos = apply_move(&pos, rules, mv, Player::X)?;
    moves.push((Player::X, mv));
    writeln!(out, "X opens at {mv}\n\n{pos}")?;

    let mut side = Player::O;
    let result = loop {
        if let Some(result) = finished(&pos, rules) {
            break result;
        }
        let SearchResult { score, best_move } =
            search(&pos, rules, config, side.is_maximizer())?;
        let Some(mv) = best_move else {
            bail!("engine found no move for {side} in a live position");
        };
        pos = apply_move(&pos, rules, mv, side)?;
        moves.push((side, mv));
        writeln!(out, "{side} plays {mv} (score {score})\n\n{pos}")?;
        side = side.opponent();
    };

    match result {
        Some(p) => writeln!(out, "{p} wins after {} moves.", moves.len())?,
        None => writeln!(out, "Draw after {} moves.", moves.len())?,
    }
    info!(moves = moves.len(), winner = ?result, "self-play finished");

    Ok(SelfPlayRecord {
        moves,
        winner: result,
        position: pos,
    })
}

// =============================================================================
// Analysis
// =============================================================================

/// Search `pos` once for `side` and print the verdict.
pub fn analyze<W: Write>(
    pos: &Position,
    rules: &Rules,
    config: &SearchConfig,
    side: Player,
    out: &mut W,
) -> Result<SearchResult> {
    writeln!(out, "{pos}")?;
    let (result, stats) = search_with_stats(pos, rules, config, side.is_maximizer())?;

    match finished(pos, rules) {
        Some(Some(p)) => writeln!(out, "{p} has already won.")?,
        Some(None) => writeln!(out, "The board is full.")?,
        None => {}
    }
    writeln!(out, "side:  {side}")?;
    writeln!(out, "score: {}", result.score)?;
    match result.best_move {
        Some(mv) => writeln!(out, "move:  {mv}")?,
        None => writeln!(out, "move:  none")?,
    }
    writeln!(out, "nodes: {}", stats.nodes)?;
    Ok(result)
}
