//! The classification layer of a pathfinding grid.
//!
//! [`Grid`] stores one [`CellKind`] per cell in row-major order and records
//! the most recently placed start and target. Access is deliberately
//! lenient: writes outside the grid are ignored and reads outside the grid
//! report [`CellKind::Obstacle`].

use std::fmt;

use rand::{Rng, RngExt};

use crate::cell::CellKind;
use crate::geom::{Pos, Size};

/// A rectangular grid of [`CellKind`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    size: Size,
    cells: Vec<CellKind>,
    start: Option<Pos>,
    target: Option<Pos>,
}

impl Grid {
    /// Create a new grid filled with [`CellKind::Empty`].
    pub fn new(rows: usize, cols: usize) -> Self {
        let size = Size::new(rows, cols);
        Self {
            size,
            cells: vec![CellKind::Empty; size.len()],
            start: None,
            target: None,
        }
    }

    /// Build a grid from a classification matrix.
    ///
    /// Start and target are recovered by a row-major scan; if the matrix
    /// holds several of either, the last one wins.
    pub fn from_rows(rows: &[Vec<CellKind>]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (c, &kind) in line.iter().enumerate() {
                grid.set(Pos::new(r as i32, c as i32), kind);
            }
        }
        Ok(grid)
    }

    /// Grid dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.size.contains(p)
    }

    /// The most recently placed start, if any.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// The most recently placed target, if any.
    #[inline]
    pub fn target(&self) -> Option<Pos> {
        self.target
    }

    /// Classification at `p`, or [`CellKind::Obstacle`] outside the grid.
    #[inline]
    pub fn get(&self, p: Pos) -> CellKind {
        match self.size.index(p) {
            Some(i) => self.cells[i],
            None => CellKind::Obstacle,
        }
    }

    /// Whether `p` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        self.get(p).is_passable()
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    ///
    /// Placing a `Start` or `Target` records `p` as the current start or
    /// target. The previously recorded cell keeps its classification.
    pub fn set(&mut self, p: Pos, kind: CellKind) {
        let Some(i) = self.size.index(p) else {
            return;
        };
        self.cells[i] = kind;
        match kind {
            CellKind::Start => self.start = Some(p),
            CellKind::Target => self.target = Some(p),
            _ => {}
        }
    }

    #[inline]
    pub fn set_obstacle(&mut self, p: Pos) {
        self.set(p, CellKind::Obstacle);
    }

    /// Mark `p` as [`CellKind::Empty`].
    #[inline]
    pub fn clear_obstacle(&mut self, p: Pos) {
        self.set(p, CellKind::Empty);
    }

    #[inline]
    pub fn set_start(&mut self, p: Pos) {
        self.set(p, CellKind::Start);
    }

    #[inline]
    pub fn set_target(&mut self, p: Pos) {
        self.set(p, CellKind::Target);
    }

    /// Reinitialize the grid to `rows × cols` empty cells and forget the
    /// start and target.
    ///
    /// Zero dimensions are rejected and leave the grid unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        log::debug!("resizing grid from {} to {rows}x{cols}", self.size);
        *self = Self::new(rows, cols);
        Ok(())
    }

    /// Reset every cell except the start and target cells to empty.
    pub fn clear(&mut self) {
        for kind in self.cells.iter_mut() {
            if !kind.is_endpoint() {
                *kind = CellKind::Empty;
            }
        }
    }

    /// Turn each non-endpoint cell into an obstacle with probability
    /// `ratio`, and into an empty cell otherwise.
    ///
    /// Returns the number of obstacles placed. A ratio outside `[0, 1]` is
    /// rejected without touching the grid.
    pub fn scatter_obstacles(&mut self, ratio: f64, rng: &mut impl Rng) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(GridError::InvalidRatio(ratio));
        }
        let mut placed = 0;
        for kind in self.cells.iter_mut() {
            if kind.is_endpoint() {
                continue;
            }
            if rng.random_range(0.0..1.0) < ratio {
                *kind = CellKind::Obstacle;
                placed += 1;
            } else {
                *kind = CellKind::Empty;
            }
        }
        log::debug!("scattered {placed} obstacles over a {} grid", self.size);
        Ok(placed)
    }

    /// Set every non-endpoint cell using `f`.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Pos) -> CellKind) {
        let size = self.size;
        for (i, kind) in self.cells.iter_mut().enumerate() {
            if !kind.is_endpoint() {
                *kind = f(size.pos(i));
            }
        }
    }

    /// Count how many cells have the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Iterate over `(Pos, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, CellKind)> + '_ {
        self.size.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows of the grid as slices.
    pub fn lines(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        // `max(1)` keeps `chunks` happy on a 0-column grid; `cells` is empty then.
        self.cells.chunks(self.size.cols.max(1))
    }
}

/// Unvalidated serialized form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    size: Size,
    cells: Vec<CellKind>,
    start: Option<Pos>,
    target: Option<Pos>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        let GridRepr {
            size,
            cells,
            start,
            target,
        } = repr;
        let expected = size.rows.checked_mul(size.cols);
        if expected != Some(cells.len()) {
            return Err(GridError::CellCount {
                rows: size.rows,
                cols: size.cols,
                found: cells.len(),
            });
        }
        for p in [start, target].into_iter().flatten() {
            if !size.contains(p) {
                return Err(GridError::EndpointOutOfBounds(p));
            }
        }
        Ok(Self {
            size,
            cells,
            start,
            target,
        })
    }
}

/// Errors reported by [`Grid`] configuration calls.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Obstacle ratio outside `[0, 1]`.
    InvalidRatio(f64),
    /// Zero rows or columns.
    InvalidDimensions { rows: usize, cols: usize },
    /// Classification matrix rows of differing widths.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Stored cells do not cover `rows × cols`.
    CellCount {
        rows: usize,
        cols: usize,
        found: usize,
    },
    /// A recorded start or target lies outside the grid.
    EndpointOutOfBounds(Pos),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRatio(r) => {
                write!(f, "grid: obstacle ratio must be between 0.0 and 1.0, got {r}")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid: invalid dimensions {rows}x{cols}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::CellCount { rows, cols, found } => {
                write!(f, "grid: {found} cells stored for a {rows}x{cols} grid")
            }
            Self::EndpointOutOfBounds(p) => write!(f, "grid: endpoint {p} is out of bounds"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.count(CellKind::Empty), 12);
        assert_eq!(g.start(), None);
        assert_eq!(g.target(), None);
    }

    #[test]
    fn out_of_bounds_set_is_ignored() {
        let mut g = Grid::new(3, 3);
        let before = g.clone();
        g.set(Pos::new(-1, -1), CellKind::Obstacle);
        g.set(Pos::new(3, 0), CellKind::Start);
        assert_eq!(g, before);
    }

    #[test]
    fn out_of_bounds_get_is_obstacle() {
        let g = Grid::new(2, 2);
        assert_eq!(g.get(Pos::new(-1, 0)), CellKind::Obstacle);
        assert_eq!(g.get(Pos::new(0, 2)), CellKind::Obstacle);
        assert!(!g.is_passable(Pos::new(2, 2)));
        assert!(g.is_passable(Pos::new(1, 1)));
    }

    #[test]
    fn new_start_does_not_clear_old() {
        let mut g = Grid::new(3, 3);
        g.set_start(Pos::new(0, 0));
        g.set_start(Pos::new(2, 2));
        assert_eq!(g.start(), Some(Pos::new(2, 2)));
        assert_eq!(g.get(Pos::new(0, 0)), CellKind::Start);
        assert_eq!(g.count(CellKind::Start), 2);
    }

    #[test]
    fn obstacle_helpers() {
        let mut g = Grid::new(2, 2);
        g.set_obstacle(Pos::new(0, 1));
        assert_eq!(g.get(Pos::new(0, 1)), CellKind::Obstacle);
        g.clear_obstacle(Pos::new(0, 1));
        assert_eq!(g.get(Pos::new(0, 1)), CellKind::Empty);
    }

    #[test]
    fn resize_resets_everything() {
        let mut g = Grid::new(2, 2);
        g.set_start(Pos::new(0, 0));
        g.set_obstacle(Pos::new(1, 1));
        g.resize(4, 5).unwrap();
        assert_eq!(g.size(), Size::new(4, 5));
        assert_eq!(g.count(CellKind::Empty), 20);
        assert_eq!(g.start(), None);
    }

    #[test]
    fn resize_rejects_zero() {
        let mut g = Grid::new(2, 2);
        g.set_obstacle(Pos::new(0, 0));
        let err = g.resize(0, 3).unwrap_err();
        assert_eq!(err, GridError::InvalidDimensions { rows: 0, cols: 3 });
        assert_eq!(g.size(), Size::new(2, 2));
        assert_eq!(g.get(Pos::new(0, 0)), CellKind::Obstacle);
    }

    #[test]
    fn clear_keeps_endpoints() {
        let mut g = Grid::new(2, 2);
        g.set_start(Pos::new(0, 0));
        g.set_target(Pos::new(1, 1));
        g.set_obstacle(Pos::new(0, 1));
        g.clear();
        assert_eq!(g.get(Pos::new(0, 1)), CellKind::Empty);
        assert_eq!(g.get(Pos::new(0, 0)), CellKind::Start);
        assert_eq!(g.get(Pos::new(1, 1)), CellKind::Target);
    }

    #[test]
    fn scatter_rejects_bad_ratio() {
        let mut g = Grid::new(3, 3);
        g.set_obstacle(Pos::new(1, 1));
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            g.scatter_obstacles(1.5, &mut rng),
            Err(GridError::InvalidRatio(1.5))
        );
        assert!(g.scatter_obstacles(-0.1, &mut rng).is_err());
        assert!(g.scatter_obstacles(f64::NAN, &mut rng).is_err());
        assert_eq!(g.count(CellKind::Obstacle), 1);
    }

    #[test]
    fn scatter_extremes() {
        let mut g = Grid::new(4, 4);
        g.set_start(Pos::new(0, 0));
        g.set_target(Pos::new(3, 3));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(g.scatter_obstacles(1.0, &mut rng), Ok(14));
        assert_eq!(g.get(Pos::new(0, 0)), CellKind::Start);
        assert_eq!(g.get(Pos::new(3, 3)), CellKind::Target);
        assert_eq!(g.scatter_obstacles(0.0, &mut rng), Ok(0));
        assert_eq!(g.count(CellKind::Empty), 14);
    }

    #[test]
    fn from_rows_recovers_endpoints() {
        use CellKind::*;
        let g = Grid::from_rows(&[
            vec![Start, Obstacle, Empty],
            vec![Empty, Empty, Target],
        ])
        .unwrap();
        assert_eq!(g.size(), Size::new(2, 3));
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.target(), Some(Pos::new(1, 2)));
        assert_eq!(g.get(Pos::new(0, 1)), Obstacle);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        use CellKind::*;
        let err = Grid::from_rows(&[vec![Empty, Empty], vec![Empty]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = Grid::new(2, 2);
        g.set_target(Pos::new(1, 0));
        let cells: Vec<(Pos, CellKind)> = g.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[2], (Pos::new(1, 0), CellKind::Target));
    }

    #[test]
    fn lines_are_rows() {
        let mut g = Grid::new(2, 3);
        g.set_obstacle(Pos::new(1, 2));
        let lines: Vec<&[CellKind]> = g.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1][2], CellKind::Obstacle);
        assert_eq!(Grid::new(0, 0).lines().count(), 0);
    }

    #[test]
    fn clone_is_deep() {
        let mut a = Grid::new(2, 2);
        let b = a.clone();
        a.set_obstacle(Pos::new(0, 0));
        assert_eq!(b.get(Pos::new(0, 0)), CellKind::Empty);
    }
}
