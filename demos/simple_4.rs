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
// Cells have a 4-neighbourhood

fn main() {
    let maze = Maze::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
    println!("{}", maze);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let path = find_path(&maze, start, end, Movement::Orthogonal).unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
