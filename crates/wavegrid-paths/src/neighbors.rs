use std::fmt;

use wavegrid_core::Pos;

/// Orthogonal offsets as `(drow, dcol)`: right, down, left, up.
pub const CARDINAL: [Pos; 4] = [
    Pos::new(0, 1),
    Pos::new(1, 0),
    Pos::new(0, -1),
    Pos::new(-1, 0),
];

/// All eight compass offsets, row by row from the top-left.
pub const ALL: [Pos; 8] = [
    Pos::new(-1, -1),
    Pos::new(-1, 0),
    Pos::new(-1, 1),
    Pos::new(0, -1),
    Pos::new(0, 1),
    Pos::new(1, -1),
    Pos::new(1, 0),
    Pos::new(1, 1),
];

/// Which cells count as adjacent during a wave.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// 4-directional movement.
    #[default]
    Cardinal,
    /// 8-directional movement, diagonals included.
    Diagonal,
}

impl Movement {
    /// Neighbour offsets in the fixed order used by both propagation and
    /// reconstruction.
    #[inline]
    pub const fn offsets(self) -> &'static [Pos] {
        match self {
            Self::Cardinal => &CARDINAL,
            Self::Diagonal => &ALL,
        }
    }

    /// Whether `a` and `b` are one step apart under this movement.
    pub fn adjacent(self, a: Pos, b: Pos) -> bool {
        self.offsets().iter().any(|&d| a + d == b)
    }

    /// Step count from `a` to `b` on a grid without obstacles.
    ///
    /// Manhattan for cardinal moves, Chebyshev once diagonals are allowed.
    /// No search under this movement can return a shorter distance.
    pub fn open_distance(self, a: Pos, b: Pos) -> usize {
        let dr = a.row.abs_diff(b.row) as usize;
        let dc = a.col.abs_diff(b.col) as usize;
        match self {
            Self::Cardinal => dr + dc,
            Self::Diagonal => dr.max(dc),
        }
    }
}

/// Cached neighbour computation helper.
///
/// Enumerates the neighbours of a position in [`Movement::offsets`] order,
/// filtered by a predicate.
pub struct Neighbors {
    movement: Movement,
    buf: Vec<Pos>,
}

impl Neighbors {
    pub fn new(movement: Movement) -> Self {
        Self {
            movement,
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the neighbours of `p` for which `keep` returns `true`.
    pub fn around(&mut self, p: Pos, keep: impl Fn(Pos) -> bool) -> &[Pos] {
        self.buf.clear();
        for &d in self.movement.offsets() {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// A single step direction, used to describe paths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Direction of a unit offset, `None` for anything else.
    pub const fn from_offset(d: Pos) -> Option<Self> {
        Some(match (d.row, d.col) {
            (0, 1) => Self::Right,
            (1, 0) => Self::Down,
            (0, -1) => Self::Left,
            (-1, 0) => Self::Up,
            (-1, -1) => Self::UpLeft,
            (-1, 1) => Self::UpRight,
            (1, -1) => Self::DownLeft,
            (1, 1) => Self::DownRight,
            _ => return None,
        })
    }

    /// Direction of the step from `a` to `b`.
    #[inline]
    pub fn between(a: Pos, b: Pos) -> Option<Self> {
        Self::from_offset(b - a)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "RIGHT",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Up => "UP",
            Self::UpLeft => "UP-LEFT",
            Self::UpRight => "UP-RIGHT",
            Self::DownLeft => "DOWN-LEFT",
            Self::DownRight => "DOWN-RIGHT",
        }
    }

    pub const fn arrow(self) -> char {
        match self {
            Self::Right => '→',
            Self::Down => '↓',
            Self::Left => '←',
            Self::Up => '↑',
            Self::UpLeft => '↖',
            Self::UpRight => '↗',
            Self::DownLeft => '↙',
            Self::DownRight => '↘',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Step directions along a path. Non-adjacent steps are skipped.
pub fn directions(path: &[Pos]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|w| Direction::between(w[0], w[1]))
        .collect()
}
