//! The [`CellKind`] type, the static classification of a grid cell.

use std::fmt;

/// Classification of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Passable cell.
    #[default]
    Empty,
    /// Blocked cell.
    Obstacle,
    /// Source of the wave.
    Start,
    /// Destination of the search.
    Target,
}

impl CellKind {
    /// Whether a walker may enter a cell of this kind.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Whether bulk edits (clearing, obstacle scattering, maze carving)
    /// must leave this cell alone.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::Target)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Empty => "empty",
            Self::Obstacle => "obstacle",
            Self::Start => "start",
            Self::Target => "target",
        };
        f.write_str(s)
    }
}
