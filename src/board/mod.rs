//! Board representation for Dots-and-Boxes

pub mod board;
pub mod square;


use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// Re-exports
pub use board::Board;
pub use square::Square;

/// Default number of points per side (a 4x4 grid of points holds 3x3 boxes)
pub const DEFAULT_POINTS: usize = 4;
/// Smallest grid that still holds a box
pub const MIN_POINTS: usize = 2;
/// Largest supported grid; keeps every box count below the terminal limit
pub const MAX_POINTS: usize = 32;

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Maximizing side, moves first
    Max,
    /// Minimizing side
    Min,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Symbol drawn inside boxes owned by this side
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::Max => 'X',
            Player::Min => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Canonical edge direction, measured from the upper/left point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Down,
    Right,
}

/// One grid edge in canonical form: the point it starts from and the
/// direction (down or right) it extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub row: u8,
    pub col: u8,
    pub dir: Direction,
}

impl Edge {
    #[inline]
    pub const fn new(row: u8, col: u8, dir: Direction) -> Self {
        Self { row, col, dir }
    }

    #[inline]
    pub const fn down(row: u8, col: u8) -> Self {
        Self::new(row, col, Direction::Down)
    }

    #[inline]
    pub const fn right(row: u8, col: u8) -> Self {
        Self::new(row, col, Direction::Right)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.dir {
            Direction::Down => "down",
            Direction::Right => "right",
        };
        write!(f, "{}-{} {}", self.row, self.col, dir)
    }
}

impl FromStr for Edge {
    type Err = BoardError;

    /// Parse `"row col dir"`, `"row,col,dir"` or `"row-col dir"`, where `dir`
    /// is any prefix of `down` or `right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BoardError::Parse(s.to_string());
        let fields: Vec<&str> = if s.contains(',') {
            s.split(',').map(str::trim).collect()
        } else {
            s.split_whitespace().collect()
        };
        if fields.iter().any(|f| f.is_empty()) {
            return Err(bad());
        }

        let (row, col, dir) = match fields.as_slice() {
            [row, col, dir] => (*row, *col, *dir),
            [point, dir] => {
                let (row, col) = point.split_once('-').ok_or_else(bad)?;
                (row, col, *dir)
            }
            _ => return Err(bad()),
        };
        let row = row.parse::<u8>().map_err(|_| bad())?;
        let col = col.parse::<u8>().map_err(|_| bad())?;
        let dir = dir.to_ascii_lowercase();

        let dir = if "down".starts_with(dir.as_str()) {
            Direction::Down
        } else if "right".starts_with(dir.as_str()) {
            Direction::Right
        } else {
            return Err(bad());
        };
        Ok(Edge::new(row, col, dir))
    }
}

/// Errors raised at the boundary between the board model and its callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have between 2 and 32 points per side, got {rows}x{cols}")]
    Dimensions { rows: usize, cols: usize },
    #[error("edge {edge} is outside a {rows}x{cols} grid")]
    OutOfBounds { edge: Edge, rows: usize, cols: usize },
    #[error("cannot parse edge from {0:?}")]
    Parse(String),
}
