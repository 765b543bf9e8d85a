//! Fuzzes the solvers by checking for many random mazes that a path is found exactly when the
//! goal is reachable by being part of the same connected component, and that every returned
//! path is a valid walk. Both movement modes are tested.
use maze_astar::{
    generate::scatter_obstacles, AstarSolver, Cell, GridSolver, Heuristic, Maze, Movement,
    PathError, SearchConfig,
};
use rand::prelude::*;

fn random_maze(rows: usize, cols: usize, rng: &mut StdRng) -> Maze {
    let mut maze = Maze::new(rows, cols).unwrap();
    for cell in maze.cells().collect::<Vec<_>>() {
        maze.set_blocked(cell, rng.gen_bool(0.4));
    }
    maze
}

fn visualize_maze(maze: &Maze, start: &Cell, end: &Cell) {
    for row in 0..maze.rows() as i32 {
        for col in 0..maze.cols() as i32 {
            let c = Cell::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if !maze.is_passable(c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for movement in [Movement::Orthogonal, Movement::Full] {
        let solver = AstarSolver::new(SearchConfig::default().with_movement(movement));
        let start = Cell::new(0, 0);
        let end = Cell::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_GRIDS {
            let mut maze = random_maze(N, N, &mut rng);
            maze.set_blocked(start, false);
            maze.set_blocked(end, false);
            let reachable = maze.reachable(start, end, movement);
            let path = solver.find_path(&maze, start, end);
            // Show the maze if the outcome disagrees with the components
            if path.is_ok() != reachable {
                visualize_maze(&maze, &start, &end);
            }
            assert_eq!(path.is_ok(), reachable);
            match path {
                Ok(path) => {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                    assert!(maze.is_valid_path(&path, movement));
                }
                Err(e) => assert_eq!(e, PathError::NotFound),
            }
        }
    }
}

/// Random endpoints on the generated one-obstacle-per-column mazes, including blocked ones.
#[test]
fn fuzz_scattered_mazes() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for movement in [Movement::Orthogonal, Movement::Full] {
        let solver = AstarSolver::new(SearchConfig::default().with_movement(movement));
        for _ in 0..N_GRIDS {
            let rows = rng.gen_range(1..8);
            let cols = rng.gen_range(1..8);
            let maze = scatter_obstacles(rows, cols, &mut rng).unwrap();
            let start = Cell::new(
                rng.gen_range(0..rows as i32),
                rng.gen_range(0..cols as i32),
            );
            let end = Cell::new(
                rng.gen_range(0..rows as i32),
                rng.gen_range(0..cols as i32),
            );
            match solver.find_path(&maze, start, end) {
                Ok(path) => {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                    // The start may sit on an obstacle; everything after it may not.
                    assert!(maze.is_valid_path(&path, movement));
                }
                Err(e) => {
                    assert_eq!(e, PathError::NotFound);
                    assert!(!maze.reachable(start, end, movement));
                }
            }
        }
    }
}

/// On an open maze every orthogonal path is a monotone staircase of minimal length.
#[test]
fn open_maze_orthogonal_paths_are_shortest() {
    for rows in 1..8 {
        for cols in 1..8 {
            let maze = Maze::new(rows, cols).unwrap();
            let start = Cell::new(0, 0);
            let end = Cell::new(rows as i32 - 1, cols as i32 - 1);
            let path = maze_astar::find_path(&maze, start, end, Movement::Orthogonal).unwrap();
            assert_eq!(path.len(), (rows - 1) + (cols - 1) + 1);
            for (i, cell) in path.iter().enumerate() {
                assert_eq!(start.manhattan_distance(cell), i as i64);
            }
        }
    }
}

#[test]
fn alternative_heuristics_agree_on_reachability() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(2);
    for movement in [Movement::Orthogonal, Movement::Full] {
        let config = SearchConfig::default().with_movement(movement);
        for heuristic in [Heuristic::Zero, Heuristic::admissible_for(movement)] {
            let solver = AstarSolver::new(config.clone().with_heuristic(heuristic));
            for _ in 0..500 {
                let mut maze = random_maze(N, N, &mut rng);
                let start = Cell::new(0, 0);
                let end = Cell::new(N as i32 - 1, N as i32 - 1);
                maze.set_blocked(start, false);
                maze.set_blocked(end, false);
                let ok = solver.find_path(&maze, start, end).is_ok();
                assert_eq!(ok, maze.reachable(start, end, movement));
            }
        }
    }
}
