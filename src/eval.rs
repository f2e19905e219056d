//! Static evaluation of non-terminal positions.
//!
//! The board is decomposed into every line of `win_length` cells (the same
//! lines win detection scans). A line held by one side only is worth
//! [`NEAR_WIN_SCORE`] when it is one marker short of a win and
//! [`FOOTHOLD_SCORE`] when it holds a single marker. Lines held by both sides
//! are dead and score nothing. X counts positive, O negative.

use crate::config::Rules;
use crate::constants::{FOOTHOLD_SCORE, NEAR_WIN_SCORE};
use crate::position::{Line, Player, Position, lines};

/// Score contributed by one line.
pub fn line_score(pos: &Position, line: &Line, rules: &Rules) -> i32 {
    let x = line.count(pos, Player::X);
    let o = line.count(pos, Player::O);
    let near = rules.win_length() - 1;

    let mut score = 0;
    if o == 0 {
        if x == near {
            score += NEAR_WIN_SCORE;
        } else if x == 1 {
            score += FOOTHOLD_SCORE;
        }
    }
    if x == 0 {
        if o == near {
            score -= NEAR_WIN_SCORE;
        } else if o == 1 {
            score -= FOOTHOLD_SCORE;
        }
    }
    score
}

/// Sum of [`line_score`] over every line on the board.
pub fn evaluate(pos: &Position, rules: &Rules) -> i32 {
    lines(rules).map(|line| line_score(pos, &line, rules)).sum()
}
