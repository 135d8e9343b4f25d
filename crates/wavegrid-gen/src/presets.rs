//! Ready-made grids.

use wavegrid_core::{Pos, Size};
use wavegrid_paths::Pathfinder;

use crate::layout::grid_from_lines;

const MAZE: [&str; 5] = ["S#...", ".#.#.", "...#.", "##...", "...#T"];

/// A 5×5 open grid with start (0,0), target (4,4) and obstacles at (2,2)
/// and (2,3).
pub fn simple_grid() -> Pathfinder {
    let mut pf = Pathfinder::new(5, 5);
    pf.set_start(Pos::new(0, 0));
    pf.set_target(Pos::new(4, 4));
    pf.set_obstacle(Pos::new(2, 2));
    pf.set_obstacle(Pos::new(2, 3));
    pf
}

/// A small 5×5 maze with start (0,0) and target (4,4).
///
/// ```text
/// S#...
/// .#.#.
/// ...#.
/// ##...
/// ...#T
/// ```
pub fn maze_grid() -> Pathfinder {
    let grid = grid_from_lines(Size::new(MAZE.len(), MAZE[0].len()), MAZE.into_iter());
    Pathfinder::from_grid(grid)
}
