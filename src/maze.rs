use crate::cell::{Cell, Movement};
use crate::error::{PathError, Result};
use crate::{N_SMALLVEC_SIZE, STEP_COST};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::grid::{BoolGrid, ValueGrid};
use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Rectangular occupancy grid. Blocked cells are stored as [true] in a [BoolGrid] indexed with
/// `x = column` and `y = row`.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: BoolGrid,
}

/// Connected components of the passable cells of a [Maze] under one [Movement].
#[derive(Clone, Debug)]
pub struct Components {
    components: UnionFind<usize>,
    rows: usize,
    cols: usize,
}

impl Components {
    fn ix(&self, cell: &Cell) -> Option<usize> {
        let row = usize::try_from(cell.row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(cell.col).ok().filter(|&c| c < self.cols)?;
        Some(row * self.cols + col)
    }
    /// Retrieves the component id a given [Cell] belongs to, or [None] if it lies outside the
    /// maze.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.ix(cell).map(|ix| self.components.find(ix))
    }
    /// Checks if two cells are on the same component. Cells outside the maze are on none.
    pub fn equiv(&self, a: &Cell, b: &Cell) -> bool {
        match (self.ix(a), self.ix(b)) {
            (Some(a), Some(b)) => self.components.equiv(a, b),
            _ => false,
        }
    }
}

impl Maze {
    /// Creates a maze without obstacles. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Maze> {
        if rows == 0 || cols == 0 {
            return Err(PathError::InvalidGrid(format!(
                "a {rows}x{cols} maze has no cells"
            )));
        }
        Ok(Maze {
            grid: BoolGrid::new(cols, rows, false),
        })
    }

    /// Builds a maze from rows of occupancy values, where 0 is passable and anything else is
    /// blocked. Every row must have the same, nonzero length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Maze> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if let Some((ix, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != cols)
        {
            return Err(PathError::InvalidGrid(format!(
                "row {ix} has {} columns, expected {cols}",
                row.as_ref().len()
            )));
        }
        let mut maze = Maze::new(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.as_ref().iter().enumerate() {
                maze.grid.set(c as i32, r as i32, value != 0);
            }
        }
        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }
    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows()
            && (cell.col as usize) < self.cols()
    }

    /// Whether the cell lies inside the maze and is not blocked.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.grid.get(cell.col, cell.row)
    }

    /// Marks an in-bounds cell as blocked or passable. Out-of-bounds cells are ignored.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if self.contains(cell) {
            self.grid.set(cell.col, cell.row, blocked);
        }
    }

    /// Number of blocked cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells().filter(|c| !self.is_passable(*c)).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows() as i32)
            .flat_map(move |r| (0..self.cols() as i32).map(move |c| Cell::new(r, c)))
    }

    /// Passable neighbours of a cell, in expansion order.
    pub fn neighbours(&self, cell: Cell, movement: Movement) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        cell.neighborhood(movement)
            .filter(|n| self.is_passable(*n))
            .collect()
    }

    /// Passable neighbours paired with the cost of stepping onto them. Diagonal steps cost the
    /// same as straight ones.
    pub fn neighbours_and_cost(
        &self,
        cell: Cell,
        movement: Movement,
    ) -> SmallVec<[(Cell, i64); N_SMALLVEC_SIZE]> {
        cell.neighborhood(movement)
            .filter(|n| self.is_passable(*n))
            .map(|n| (n, STEP_COST))
            .collect()
    }

    /// Links up passable grid neighbours into connected components. Only forward neighbours are
    /// visited since union is symmetric.
    pub fn components(&self, movement: Movement) -> Components {
        let mut components = Components {
            components: UnionFind::new(self.rows() * self.cols()),
            rows: self.rows(),
            cols: self.cols(),
        };
        let forward: &[(i32, i32)] = match movement {
            Movement::Orthogonal => &[(0, 1), (1, 0)],
            Movement::Full => &[(0, 1), (1, -1), (1, 0), (1, 1)],
        };
        for cell in self.cells().filter(|c| self.is_passable(*c)) {
            for &(dr, dc) in forward {
                let n = Cell::new(cell.row + dr, cell.col + dc);
                if !self.is_passable(n) {
                    continue;
                }
                if let (Some(parent_ix), Some(ix)) = (components.ix(&cell), components.ix(&n)) {
                    components.components.union(parent_ix, ix);
                }
            }
        }
        components
    }

    /// Checks if a search from start can reach goal. The goal must be passable and on the same
    /// component as the start. A blocked start is still left through its passable neighbours, so
    /// then one of those has to share the goal's component.
    pub fn reachable(&self, start: Cell, goal: Cell, movement: Movement) -> bool {
        if start == goal {
            return self.contains(start);
        }
        if !self.contains(start) || !self.is_passable(goal) {
            return false;
        }
        let components = self.components(movement);
        if self.is_passable(start) {
            components.equiv(&start, &goal)
        } else {
            self.neighbours(start, movement)
                .iter()
                .any(|n| components.equiv(n, &goal))
        }
    }

    /// Checks that a path is a sequence of distinct in-bounds cells, each a single step from the
    /// previous one, where every cell after the first is passable.
    pub fn is_valid_path(&self, path: &[Cell], movement: Movement) -> bool {
        let Some(first) = path.first() else {
            return false;
        };
        let mut seen = FxHashSet::default();
        self.contains(*first)
            && path.iter().all(|c| seen.insert(*c))
            && path
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.is_step(b, movement) && self.is_passable(*b))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..self.rows() as i32 {
            let values = (0..self.cols() as i32)
                .map(|c| self.grid.get(c, r) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
