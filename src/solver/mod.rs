use crate::cell::{Cell, Movement};
use crate::config::SearchConfig;
use crate::error::{Endpoint, PathError, Result};
use crate::maze::Maze;
use crate::search::{astar, SearchOutcome};
use log::{debug, info, warn};

pub mod astar;
pub mod dijkstra;

/// Estimate of the remaining cost from a cell to the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Sum of squared axis deltas. Not admissible: it overestimates as soon as the goal is more
    /// than one step away along both axes, so paths are not guaranteed to be shortest.
    #[default]
    SquaredEuclidean,
    /// Admissible for orthogonal movement.
    Manhattan,
    /// Admissible for full movement, where a diagonal step costs the same as a straight one.
    Chebyshev,
    /// Turns A* into uniform-cost search.
    Zero,
}

impl Heuristic {
    pub fn estimate(self, p1: &Cell, p2: &Cell) -> i64 {
        match self {
            Heuristic::SquaredEuclidean => p1.squared_distance(p2),
            Heuristic::Manhattan => p1.manhattan_distance(p2),
            Heuristic::Chebyshev => p1.chebyshev_distance(p2),
            Heuristic::Zero => 0,
        }
    }

    /// The admissible heuristic matching a movement mode.
    pub fn admissible_for(movement: Movement) -> Heuristic {
        match movement {
            Movement::Orthogonal => Heuristic::Manhattan,
            Movement::Full => Heuristic::Chebyshev,
        }
    }
}

/// A found path together with its cost and the effort spent finding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Cells from start to end, both inclusive.
    pub path: Vec<Cell>,
    /// Number of steps taken.
    pub cost: i64,
    /// Number of nodes moved to the visited set.
    pub expanded: usize,
}

/// Rejects endpoints outside the maze, checking rows against the row count and columns against
/// the column count.
pub fn validate_endpoints(maze: &Maze, start: Cell, end: Cell) -> Result<()> {
    for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !maze.contains(cell) {
            debug!(
                "{} point {} lies outside the {}x{} maze",
                endpoint,
                cell,
                maze.rows(),
                maze.cols()
            );
            return Err(PathError::InvalidInput {
                endpoint,
                cell,
                rows: maze.rows(),
                cols: maze.cols(),
            });
        }
    }
    Ok(())
}

pub trait GridSolver {
    type Successors: IntoIterator<Item = (Cell, i64)>;

    fn config(&self) -> &SearchConfig;

    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i64;

    fn successors(&self, maze: &Maze, node: &Cell) -> Self::Successors;

    /// Computes a path from start to end along with its cost and the number of expanded nodes.
    fn solve(&self, maze: &Maze, start: Cell, end: Cell) -> Result<Solution> {
        validate_endpoints(maze, start, end)?;
        let config = self.config();
        if config.component_check && !maze.reachable(start, end, config.movement) {
            info!("{} is not reachable from {}", end, start);
            return Err(PathError::NotFound);
        }
        debug!(
            "Searching {}x{} maze from {} to {} ({:?}, {:?})",
            maze.rows(),
            maze.cols(),
            start,
            end,
            config.movement,
            config.heuristic
        );
        match astar(
            &start,
            |node| self.successors(maze, node),
            |node| self.heuristic(node, &end),
            |node| *node == end,
            |expanded| config.should_stop(expanded),
        ) {
            SearchOutcome::Found {
                path,
                cost,
                expanded,
            } => {
                debug!("Found path of {} steps after {} expansions", cost, expanded);
                Ok(Solution {
                    path,
                    cost,
                    expanded,
                })
            }
            SearchOutcome::Exhausted { expanded } => {
                debug!("Frontier exhausted after {} expansions", expanded);
                Err(PathError::NotFound)
            }
            SearchOutcome::Stopped { expanded } => {
                warn!("Search stopped after {} expansions", expanded);
                Err(PathError::Cancelled { expanded })
            }
        }
    }

    /// Computes the sequence of cells leading from start to end.
    fn find_path(&self, maze: &Maze, start: Cell, end: Cell) -> Result<Vec<Cell>> {
        self.solve(maze, start, end).map(|s| s.path)
    }
}
