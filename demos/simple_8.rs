use maze_astar::{find_path, Cell, Maze, Movement};

// In this example a path is found on a 3x3 maze with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Cells have an 8-neighbourhood

fn main() {
    let mut maze = Maze::new(3, 3).unwrap();
    maze.set_blocked(Cell::new(1, 1), true);
    println!("{}", maze);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let path = find_path(&maze, start, end, Movement::Full).unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
