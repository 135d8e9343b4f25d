use rand::Rng;
use wavegrid_core::{CellKind, Grid, GridError, Pos, Size};

use crate::config::SearchConfig;
use crate::distmap::{DistanceMap, PathNode};
use crate::neighbors::{Direction, Movement, directions};

/// Source, target and movement of the last find call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    source: Pos,
    target: Pos,
    movement: Movement,
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// A grid together with the results of the last wave run over it.
///
/// `Pathfinder` owns the classification [`Grid`], the [`DistanceMap`]
/// produced by the last wave, the reconstructed path and whether that run
/// succeeded. Single-cell edits do not invalidate previous results; callers
/// that edit the grid should treat them as stale until the next find call.
/// Cloning yields a fully independent copy.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    grid: Grid,
    map: DistanceMap,
    path: Vec<Pos>,
    found: bool,
    last: Option<Run>,
    config: SearchConfig,
}

impl Pathfinder {
    /// Create a pathfinder over an empty `rows × cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_grid(Grid::new(rows, cols))
    }

    /// Create a pathfinder over an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            map: DistanceMap::new(grid.size()),
            grid,
            ..Self::default()
        }
    }

    /// Create a pathfinder from a classification matrix.
    pub fn from_rows(rows: &[Vec<CellKind>]) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::from_rows(rows)?))
    }

    /// Replace the search configuration (builder).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    // -----------------------------------------------------------------------
    // Grid access
    // -----------------------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Swap in a new grid, discarding labels and any stored path.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.map = DistanceMap::new(grid.size());
        self.grid = grid;
        self.invalidate();
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.grid.size()
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.grid.start()
    }

    #[inline]
    pub fn target(&self) -> Option<Pos> {
        self.grid.target()
    }

    /// See [`Grid::set`].
    #[inline]
    pub fn set_cell(&mut self, p: Pos, kind: CellKind) {
        self.grid.set(p, kind);
    }

    /// See [`Grid::get`].
    #[inline]
    pub fn cell(&self, p: Pos) -> CellKind {
        self.grid.get(p)
    }

    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        self.grid.is_passable(p)
    }

    #[inline]
    pub fn set_obstacle(&mut self, p: Pos) {
        self.grid.set_obstacle(p);
    }

    #[inline]
    pub fn clear_obstacle(&mut self, p: Pos) {
        self.grid.clear_obstacle(p);
    }

    #[inline]
    pub fn set_start(&mut self, p: Pos) {
        self.grid.set_start(p);
    }

    #[inline]
    pub fn set_target(&mut self, p: Pos) {
        self.grid.set_target(p);
    }

    /// Reinitialize to an empty `rows × cols` grid. See [`Grid::resize`].
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        self.grid.resize(rows, cols)?;
        self.map = DistanceMap::new(self.grid.size());
        self.invalidate();
        Ok(())
    }

    /// Empty every non-endpoint cell and drop the stored path.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.invalidate();
    }

    /// Scatter obstacles over the grid. See [`Grid::scatter_obstacles`].
    pub fn generate_random_obstacles(
        &mut self,
        ratio: f64,
        rng: &mut impl Rng,
    ) -> Result<usize, GridError> {
        let placed = self.grid.scatter_obstacles(ratio, rng)?;
        self.invalidate();
        Ok(placed)
    }

    fn invalidate(&mut self) {
        self.path.clear();
        self.found = false;
        self.last = None;
    }

    // -----------------------------------------------------------------------
    // Searching
    // -----------------------------------------------------------------------

    /// Search between the grid's recorded start and target using the
    /// configured movement.
    ///
    /// Returns `false` if either endpoint is missing, invalid or the target
    /// is unreachable.
    pub fn find_path(&mut self) -> bool {
        self.find_recorded(self.config.movement)
    }

    /// Search between the recorded start and target with 8-directional
    /// movement.
    pub fn find_path_with_diagonal(&mut self) -> bool {
        self.find_recorded(Movement::Diagonal)
    }

    /// Search between `source` and `target`, ignoring the recorded endpoints
    /// for this call only.
    pub fn find_path_between(&mut self, source: Pos, target: Pos) -> bool {
        self.run(source, target, self.config.movement)
    }

    /// Search between explicit endpoints with an explicit movement.
    pub fn find_path_with(&mut self, source: Pos, target: Pos, movement: Movement) -> bool {
        self.run(source, target, movement)
    }

    fn find_recorded(&mut self, movement: Movement) -> bool {
        match (self.grid.start(), self.grid.target()) {
            (Some(source), Some(target)) => self.run(source, target, movement),
            _ => {
                log::warn!("cannot search: start or target not set");
                self.map.reset(&self.grid);
                self.invalidate();
                false
            }
        }
    }

    fn run(&mut self, source: Pos, target: Pos, movement: Movement) -> bool {
        self.invalidate();
        self.last = Some(Run {
            source,
            target,
            movement,
        });

        if !self.grid.is_passable(source) || !self.grid.is_passable(target) {
            self.map.reset(&self.grid);
            log::debug!("wave {source} -> {target}: endpoint outside grid or blocked");
            return false;
        }

        let labelled = self.map.propagate(
            &self.grid,
            source,
            Some(target),
            movement,
            self.config.stop_at_target,
        );
        log::debug!("wave {source} -> {target} ({movement:?}): {labelled} cells labelled");
        self.settle(source, target, movement)
    }

    /// Record the outcome of the labels currently in the map.
    fn settle(&mut self, source: Pos, target: Pos, movement: Movement) -> bool {
        self.path.clear();
        self.found = self.map.is_reached(target);
        if !self.found {
            log::debug!("wave {source} -> {target}: target unreachable");
            return false;
        }

        match self.map.reconstruct(source, target, movement) {
            Ok(path) => self.path = path,
            Err(e) => log::error!("labels inconsistent after wave {source} -> {target}: {e}"),
        }
        true
    }

    /// Label every cell within `max_distance` of `source`, dropping any
    /// stored path. See [`DistanceMap::flood_fill`].
    pub fn flood_fill(&mut self, source: Pos, max_distance: usize) -> Vec<PathNode> {
        self.invalidate();
        let reached = self
            .map
            .flood_fill(&self.grid, source, max_distance, self.config.movement);
        log::debug!(
            "flood fill from {source} within {max_distance}: {} cells",
            reached.len()
        );
        reached
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Whether the last find call succeeded.
    ///
    /// If this is `true` while [`path`](Self::path) is empty, the path could
    /// not be rebuilt from the labels; that failure is logged.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.found
    }

    /// The last reconstructed path, source first. Empty if none.
    #[inline]
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// Step directions along [`path`](Self::path).
    pub fn directions(&self) -> Vec<Direction> {
        directions(&self.path)
    }

    /// Movement used by the last find call.
    pub fn last_movement(&self) -> Option<Movement> {
        self.last.map(|r| r.movement)
    }

    /// Source and target of the last find call.
    pub fn last_endpoints(&self) -> Option<(Pos, Pos)> {
        self.last.map(|r| (r.source, r.target))
    }

    /// Distance from source to target of the last successful find call.
    pub fn distance(&self) -> Option<usize> {
        let run = self.last.filter(|_| self.found)?;
        self.map.distance_at(run.target)
    }

    /// Distance from the last wave's source to `p`, `None` if `p` is
    /// unreachable, an obstacle or outside the grid.
    pub fn distance_at(&self, p: Pos) -> Option<usize> {
        if !self.grid.is_passable(p) {
            return None;
        }
        self.map.distance_at(p)
    }

    /// All cells within `max_distance` of the last wave's source, in
    /// row-major order. Reads the current labels without re-running the wave.
    pub fn reachable_cells(&self, max_distance: usize) -> Vec<Pos> {
        self.map.reachable_cells(max_distance)
    }

    /// The distance layer of the last wave.
    #[inline]
    pub fn distances(&self) -> &DistanceMap {
        &self.map
    }
}
