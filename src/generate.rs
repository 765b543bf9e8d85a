//! Random maze generation.

use crate::cell::Cell;
use crate::error::Result;
use crate::maze::Maze;
use log::debug;
use rand::Rng;

/// Creates a `rows` x `cols` maze with exactly one obstacle per column, placed on a uniformly
/// random row other than the first. Row 0 therefore always stays open. A single-row maze has no
/// row to place obstacles on and is returned without any.
pub fn scatter_obstacles<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(rows, cols)?;
    if rows < 2 {
        debug!("Maze has a single row, leaving it without obstacles");
        return Ok(maze);
    }
    for col in 0..cols {
        let row = rng.gen_range(1..rows);
        maze.set_blocked(Cell::new(row as i32, col as i32), true);
    }
    Ok(maze)
}
