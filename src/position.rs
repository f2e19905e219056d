//! Board positions, move application, and win detection.
//!
//! This module provides the board model shared by evaluation and search:
//! - Fixed-capacity cell storage that copies by value
//! - Line enumeration in the four scan directions
//! - Win, draw and legal-move queries
//! - Non-mutating move application
//!
//! A [`Position`] is `Copy`. Applying a move always yields a fresh position,
//! so a parent and the children generated from it never share cells.

use std::fmt;
use std::ops::Range;

use crate::config::Rules;
use crate::constants::{MARK_EMPTY, MARK_O, MARK_X, MAX_BOARD_SIZE, MAX_CELLS};
use crate::error::{MoveError, PositionError};

/// One of the two sides. `X` maximizes, `O` minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => MARK_X,
            Player::O => MARK_O,
        }
    }

    /// The side that maximizes the score.
    #[inline]
    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A (row, column) coordinate. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// =============================================================================
// Lines
// =============================================================================

/// Scan direction of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right (`\`).
    Diagonal,
    /// Down and to the left (`/`).
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Row and column step between consecutive cells.
    fn step(self) -> (usize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Rows and columns at which a full-length line in this direction may start.
    fn origins(self, rules: &Rules) -> (Range<usize>, Range<usize>) {
        let n = rules.size();
        let span = rules.span();
        match self {
            Direction::Horizontal => (0..n, 0..span),
            Direction::Vertical => (0..span, 0..n),
            Direction::Diagonal => (0..span, 0..span),
            Direction::AntiDiagonal => (0..span, rules.win_length() - 1..n),
        }
    }
}

/// A run of exactly `length` cells starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub origin: Move,
    pub direction: Direction,
    pub length: usize,
}

impl Line {
    pub fn cells(&self) -> impl Iterator<Item = Move> + use<> {
        let Line {
            origin,
            direction,
            length,
        } = *self;
        let (dr, dc) = direction.step();
        (0..length).map(move |i| {
            // Anti-diagonal origins start at column >= length - 1.
            let col = origin.col as isize + dc * i as isize;
            Move::new(origin.row + dr * i, col as usize)
        })
    }

    /// Number of cells on this line held by `player`.
    pub fn count(&self, pos: &Position, player: Player) -> usize {
        self.cells().filter(|&mv| pos.get(mv) == Some(player)).count()
    }
}

/// Every line of `rules.win_length()` cells on the board, each exactly once.
///
/// Directions are visited in [`Direction::ALL`] order and origins row-major
/// within each direction.
pub fn lines(rules: &Rules) -> impl Iterator<Item = Line> + '_ {
    Direction::ALL.into_iter().flat_map(move |direction| {
        let (rows, cols) = direction.origins(rules);
        rows.flat_map(move |row| {
            cols.clone().map(move |col| Line {
                origin: Move::new(row, col),
                direction,
                length: rules.win_length(),
            })
        })
    })
}

// =============================================================================
// Position
// =============================================================================

/// A board snapshot. Only the first `size * size` cells are in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    size: usize,
    cells: [Option<Player>; MAX_CELLS],
}

impl Default for Position {
    fn default() -> Self {
        Self::empty(&Rules::default())
    }
}

impl Position {
    pub fn empty(rules: &Rules) -> Self {
        debug_assert!(rules.size() <= MAX_BOARD_SIZE);
        Self {
            size: rules.size(),
            cells: [None; MAX_CELLS],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    #[inline]
    fn idx(&self, mv: Move) -> usize {
        mv.row * self.size + mv.col
    }

    /// Occupant of `mv`, or `None` if the cell is empty or off the board.
    pub fn get(&self, mv: Move) -> Option<Player> {
        if !self.in_bounds(mv) {
            return None;
        }
        self.cells[self.idx(mv)]
    }

    fn used(&self) -> &[Option<Player>] {
        &self.cells[..self.size * self.size]
    }

    /// Number of markers `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.used().iter().filter(|&&c| c == Some(player)).count()
    }

    /// The side to move assuming X moved first and turns alternated.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// The same position with every X and O exchanged.
    pub fn swapped(&self) -> Self {
        let mut out = *self;
        for cell in out.cells.iter_mut() {
            *cell = cell.map(Player::opponent);
        }
        out
    }

    /// Parse `size` rows of `X`, `O` and `.` separated by `/` or whitespace.
    pub fn parse(text: &str, rules: &Rules) -> Result<Self, PositionError> {
        let rows: Vec<&str> = text
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if rows.len() != rules.size() {
            return Err(PositionError::RowCount {
                expected: rules.size(),
                found: rows.len(),
            });
        }

        let mut pos = Self::empty(rules);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != rules.size() {
                return Err(PositionError::RowLength {
                    row,
                    expected: rules.size(),
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch.to_ascii_uppercase() {
                    MARK_X => Some(Player::X),
                    MARK_O => Some(Player::O),
                    MARK_EMPTY => None,
                    _ => return Err(PositionError::BadCell { row, ch }),
                };
                let i = pos.idx(Move::new(row, col));
                pos.cells[i] = cell;
            }
        }
        Ok(pos)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..self.size {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row}")?;
            for col in 0..self.size {
                let ch = match self.get(Move::new(row, col)) {
                    Some(p) => p.symbol(),
                    None => MARK_EMPTY,
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// Board Queries
// =============================================================================

/// True if `player` occupies every cell of some line.
pub fn is_win(pos: &Position, rules: &Rules, player: Player) -> bool {
    lines(rules).any(|line| line.cells().all(|mv| pos.get(mv) == Some(player)))
}

/// The side holding a complete line, checking X first.
pub fn winner(pos: &Position, rules: &Rules) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&p| is_win(pos, rules, p))
}

/// True if no empty cell remains. Callers check for a win first.
pub fn is_draw(pos: &Position) -> bool {
    pos.used().iter().all(Option::is_some)
}

/// Every empty cell, row ascending then column ascending.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let n = pos.size;
    (0..n)
        .flat_map(|row| (0..n).map(move |col| Move::new(row, col)))
        .filter(|&mv| pos.get(mv).is_none())
        .collect()
}

/// A copy of `pos` with `player` placed at `mv`.
///
/// The original position is left untouched. Fails if `mv` is off the board
/// or already occupied.
pub fn apply_move(
    pos: &Position,
    rules: &Rules,
    mv: Move,
    player: Player,
) -> Result<Position, MoveError> {
    if !pos.in_bounds(mv) || mv.row >= rules.size() || mv.col >= rules.size() {
        return Err(MoveError::OutOfBounds {
            mv,
            size: rules.size(),
        });
    }
    if pos.get(mv).is_some() {
        return Err(MoveError::Occupied(mv));
    }
    let mut child = *pos;
    let i = child.idx(mv);
    child.cells[i] = Some(player);
    Ok(child)
}
