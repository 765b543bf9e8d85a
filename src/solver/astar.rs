use smallvec::SmallVec;

use crate::{cell::Cell, config::SearchConfig, maze::Maze, solver::GridSolver, N_SMALLVEC_SIZE};

#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SearchConfig,
}

impl AstarSolver {
    pub fn new(config: SearchConfig) -> AstarSolver {
        AstarSolver { config }
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Cell, i64); N_SMALLVEC_SIZE]>;

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn successors(&self, maze: &Maze, node: &Cell) -> Self::Successors {
        maze.neighbours_and_cost(*node, self.config.movement)
    }

    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i64 {
        self.config.heuristic.estimate(p1, p2)
    }
}
