//! # maze_astar
//!
//! Shortest paths through grid mazes with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Cells are either passable or blocked,
//! movement is either 4-directional ([Movement::Orthogonal]) or 8-directional ([Movement::Full])
//! and every step costs the same. The default heuristic is the squared Euclidean distance, which
//! is not admissible: admissible alternatives can be selected through [SearchConfig].
//!
//! ```
//! use maze_astar::{find_path, Cell, Maze, Movement};
//!
//! let maze = Maze::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
//! let path = find_path(&maze, Cell::new(0, 0), Cell::new(2, 2), Movement::Orthogonal).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
mod search;
pub mod cell;
pub mod config;
pub mod error;
pub mod generate;
pub mod maze;
pub mod solver;

pub use crate::cell::{Cell, Movement};
pub use crate::config::{CancelToken, SearchConfig};
pub use crate::error::{Endpoint, ParseCellError, PathError, Result};
pub use crate::maze::Maze;
pub use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, Heuristic, Solution};

/// Cost of moving onto a neighbouring cell, straight or diagonal.
pub const STEP_COST: i64 = 1;
/// Inline capacity for neighbour lists; the largest neighbourhood has 8 cells.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Computes a path from start to end with the default heuristic. Returns
/// [PathError::InvalidInput] if either point lies outside the maze and [PathError::NotFound] if
/// the end cannot be reached.
pub fn find_path(maze: &Maze, start: Cell, end: Cell, movement: Movement) -> Result<Vec<Cell>> {
    AstarSolver::new(SearchConfig::default().with_movement(movement)).find_path(maze, start, end)
}

/// Formats a path as a bracketed list of `(row, col)` pairs.
pub fn format_path(path: &[Cell]) -> String {
    format!("[{}]", itertools::join(path, ", "))
}
