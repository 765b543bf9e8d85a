use crate::error::ParseCellError;
use core::fmt;
use std::str::FromStr;

/// A grid position given as (row, column). Coordinates are signed so that out-of-range input can
/// be represented and rejected by the search instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Offsets in (row, column) order. The first four are the orthogonal moves (left, right, up, down),
/// followed by the diagonals (up-left, up-right, down-left, down-right). Expansion order follows
/// this table, which makes tie-breaking reproducible.
const OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Which neighbours a cell has during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Movement {
    /// The 4-neighbourhood (up, down, left, right).
    #[default]
    Orthogonal,
    /// The 8-neighbourhood: orthogonal moves plus the four diagonals.
    Full,
}

impl Movement {
    /// The (row, column) offsets reachable in a single step.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Movement::Orthogonal => &OFFSETS[..4],
            Movement::Full => &OFFSETS,
        }
    }
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Neighbouring positions in expansion order. These are not bounds checked.
    pub fn neighborhood(self, movement: Movement) -> impl Iterator<Item = Cell> {
        movement
            .offsets()
            .iter()
            .map(move |&(dr, dc)| Cell::new(self.row + dr, self.col + dc))
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i64 {
        (self.row as i64 - other.row as i64).abs() + (self.col as i64 - other.col as i64).abs()
    }

    /// Number of king moves between two cells.
    pub fn chebyshev_distance(&self, other: &Cell) -> i64 {
        (self.row as i64 - other.row as i64)
            .abs()
            .max((self.col as i64 - other.col as i64).abs())
    }

    /// Sum of squared axis deltas, without the square root.
    pub fn squared_distance(&self, other: &Cell) -> i64 {
        let dr = self.row as i64 - other.row as i64;
        let dc = self.col as i64 - other.col as i64;
        dr * dr + dc * dc
    }

    /// Whether `other` is exactly one step away from this cell under `movement`.
    pub fn is_step(&self, other: &Cell, movement: Movement) -> bool {
        let dr = other.row as i64 - self.row as i64;
        let dc = other.col as i64 - self.col as i64;
        movement
            .offsets()
            .iter()
            .any(|&(r, c)| (r as i64, c as i64) == (dr, dc))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`, trimming whitespace around either number.
impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let mut next_part = || match parts.next() {
            Some(part) if !part.is_empty() => part
                .parse::<i32>()
                .map_err(|_| ParseCellError::NotAnInteger(part.to_owned())),
            _ => Err(ParseCellError::MissingCoordinate(s.to_owned())),
        };
        let row = next_part()?;
        let col = next_part()?;
        if parts.next().is_some() {
            return Err(ParseCellError::TooManyCoordinates(s.to_owned()));
        }
        Ok(Cell::new(row, col))
    }
}
