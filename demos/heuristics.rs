use maze_astar::generate::scatter_obstacles;
use maze_astar::{
    format_path, AstarSolver, Cell, DijkstraSolver, GridSolver, Heuristic, Movement, SearchConfig,
};
use rand::{rngs::StdRng, SeedableRng};

// The squared Euclidean heuristic overestimates the remaining distance, which pulls the search
// towards the goal quickly but can return longer paths once diagonal moves are allowed. This
// compares it with the admissible heuristic for each movement mode and with plain Dijkstra.

fn main() {
    const N: usize = 12;
    let maze = scatter_obstacles(N, N, &mut StdRng::seed_from_u64(7)).unwrap();
    println!("{}", maze);
    let start = Cell::new(0, 0);
    let end = Cell::new(N as i32 - 1, N as i32 - 1);
    for movement in [Movement::Orthogonal, Movement::Full] {
        println!("{:?}:", movement);
        let config = SearchConfig::default().with_movement(movement);
        for heuristic in [
            Heuristic::SquaredEuclidean,
            Heuristic::admissible_for(movement),
        ] {
            let solver = AstarSolver::new(config.clone().with_heuristic(heuristic));
            match solver.solve(&maze, start, end) {
                Ok(s) => println!(
                    "  {:?}: {} steps, {} expanded\n    {}",
                    heuristic,
                    s.cost,
                    s.expanded,
                    format_path(&s.path)
                ),
                Err(e) => println!("  {:?}: {}", heuristic, e),
            }
        }
        match DijkstraSolver::new(config).solve(&maze, start, end) {
            Ok(s) => println!("  Dijkstra: {} steps, {} expanded", s.cost, s.expanded),
            Err(e) => println!("  Dijkstra: {}", e),
        }
    }
}
