use smallvec::SmallVec;

use crate::{cell::Cell, config::SearchConfig, maze::Maze, solver::GridSolver, N_SMALLVEC_SIZE};

/// Uniform-cost search. Always returns a shortest path, which makes it the reference the other
/// solvers are measured against.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    config: SearchConfig,
}

impl DijkstraSolver {
    pub fn new(config: SearchConfig) -> DijkstraSolver {
        DijkstraSolver { config }
    }
}

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Cell, i64); N_SMALLVEC_SIZE]>;

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn successors(&self, maze: &Maze, node: &Cell) -> Self::Successors {
        maze.neighbours_and_cost(*node, self.config.movement)
    }

    fn heuristic(&self, _: &Cell, _: &Cell) -> i64 {
        0
    }
}
