//! Maze generation.
//!
//! [`MazeGen`] carves a maze with a randomized depth-first backtracker.
//! Rooms sit on even `(row, col)` coordinates and the odd cells between
//! them are walls unless a passage is carved through.

use rand::{Rng, RngExt};
use wavegrid_core::{CellKind, Grid, Pos};

/// Offsets between neighbouring rooms.
const ROOM_STEPS: [Pos; 4] = [
    Pos::new(0, 2),
    Pos::new(2, 0),
    Pos::new(0, -2),
    Pos::new(-2, 0),
];

/// Maze generator operating on a [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Consume the generator and return the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Carve a maze into the whole grid.
    ///
    /// Every non-endpoint cell is first turned into an obstacle, then a
    /// spanning tree of rooms is carved from (0, 0). Every start and target
    /// cell keeps its classification and is joined to the nearest room, so
    /// every passable cell is reachable from every other one with
    /// 4-directional movement.
    ///
    /// Returns the number of passable cells.
    pub fn carve(&mut self) -> usize {
        if self.grid.size().is_empty() {
            return 0;
        }
        self.grid.fill_fn(|_| CellKind::Obstacle);

        let size = self.grid.size();
        let mut visited = vec![false; size.len()];
        let mut stack = vec![Pos::ZERO];
        self.open(Pos::ZERO);
        visited[0] = true;

        let mut options: Vec<Pos> = Vec::with_capacity(4);
        while let Some(&room) = stack.last() {
            options.clear();
            for d in ROOM_STEPS {
                let next = room + d;
                if let Some(i) = size.index(next) {
                    if !visited[i] {
                        options.push(next);
                    }
                }
            }
            if options.is_empty() {
                stack.pop();
                continue;
            }

            let next = options[self.rng.random_range(0..options.len())];
            // The wall cell halfway between the two rooms.
            let wall = Pos::new((room.row + next.row) / 2, (room.col + next.col) / 2);
            self.open(wall);
            self.open(next);
            if let Some(i) = size.index(next) {
                visited[i] = true;
            }
            stack.push(next);
        }

        // Stale endpoints left by earlier `set_start` calls are joined too.
        let endpoints: Vec<Pos> = self
            .grid
            .iter()
            .filter(|(_, kind)| kind.is_endpoint())
            .map(|(p, _)| p)
            .collect();
        for p in endpoints {
            self.connect(p);
        }

        let passable = size.len() - self.grid.count(CellKind::Obstacle);
        log::debug!("carved a {size} maze with {passable} passable cells");
        passable
    }

    /// Open a straight route from `p` to the room at or just above-left of it.
    fn connect(&mut self, p: Pos) {
        let room = Pos::new(p.row - p.row % 2, p.col - p.col % 2);
        self.open(Pos::new(room.row, p.col));
        self.open(room);
    }

    fn open(&mut self, p: Pos) {
        if !self.grid.get(p).is_endpoint() {
            self.grid.set(p, CellKind::Empty);
        }
    }
}
