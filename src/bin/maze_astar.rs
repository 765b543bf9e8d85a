use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, error};
use maze_astar::generate::scatter_obstacles;
use maze_astar::{
    format_path, AstarSolver, Cell, GridSolver, Heuristic, Movement, PathError, SearchConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

/// Finds a path through a maze with one randomly placed obstacle per column.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of rows in the maze (prompted for if omitted)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns in the maze (prompted for if omitted)
    #[arg(long)]
    cols: Option<usize>,

    /// Starting point as `row,col` (prompted for if omitted)
    #[arg(long)]
    start: Option<Cell>,

    /// End point as `row,col` (prompted for if omitted)
    #[arg(long)]
    end: Option<Cell>,

    #[arg(long, value_enum, default_value_t = MovementArg::Orthogonal)]
    movement: MovementArg,

    #[arg(long, value_enum, default_value_t = HeuristicArg::SquaredEuclidean)]
    heuristic: HeuristicArg,

    /// Seed for the obstacle layout; a random seed is used if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after expanding this many nodes
    #[arg(long)]
    max_expansions: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MovementArg {
    Orthogonal,
    Full,
}

impl From<MovementArg> for Movement {
    fn from(arg: MovementArg) -> Self {
        match arg {
            MovementArg::Orthogonal => Movement::Orthogonal,
            MovementArg::Full => Movement::Full,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicArg {
    SquaredEuclidean,
    Manhattan,
    Chebyshev,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::SquaredEuclidean => Heuristic::SquaredEuclidean,
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Chebyshev => Heuristic::Chebyshev,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

/// Asks on stdout and reads one line from stdin until it parses.
fn prompt<T>(question: &str) -> io::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let stdin = io::stdin();
    loop {
        print!("{question}");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more input",
            ));
        }
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => println!("Invalid input: {e}"),
        }
    }
}

fn run(args: Args) -> io::Result<ExitCode> {
    let rows = match args.rows {
        Some(rows) => rows,
        None => prompt("Please enter the amount of rows you'd like for the maze: ")?,
    };
    let cols = match args.cols {
        Some(cols) => cols,
        None => prompt("Please enter the amount of columns you'd like for the maze: ")?,
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    debug!("Generating {}x{} maze with seed {}", rows, cols, seed);
    let maze = match scatter_obstacles(rows, cols, &mut StdRng::seed_from_u64(seed)) {
        Ok(maze) => maze,
        Err(e) => {
            error!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let start = match args.start {
        Some(start) => start,
        None => prompt("Please enter the coordinate for the starting point, separated by a comma (i.e. 0,0): ")?,
    };
    let end = match args.end {
        Some(end) => end,
        None => prompt("Please enter the coordinate for the end point, separated by a comma (i.e. 0,0): ")?,
    };

    println!("\nStarting position: {start}");
    println!("Goal position: {end}");
    println!("\nMaze:\n{maze}");

    let mut config = SearchConfig::default()
        .with_movement(args.movement.into())
        .with_heuristic(args.heuristic.into());
    config.max_expansions = args.max_expansions;
    match AstarSolver::new(config).solve(&maze, start, end) {
        Ok(solution) => {
            println!("Path: {}", format_path(&solution.path));
            debug!(
                "{} steps, {} nodes expanded",
                solution.cost, solution.expanded
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(PathError::NotFound) => {
            println!("No path found");
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ PathError::Cancelled { .. }) => {
            println!("Gave up: {e}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{e}. Please try again with a different point.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            error!("Failed to read input: {e}");
            ExitCode::FAILURE
        }
    }
}
