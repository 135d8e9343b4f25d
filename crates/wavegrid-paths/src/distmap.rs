use wavegrid_core::{Pos, Size};

/// A position with its true distance from the wave source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Pos,
    pub distance: usize,
}

/// Label of an obstacle cell.
pub const BLOCKED: i32 = -1;

/// Label of a passable cell the wave has not reached.
pub const UNVISITED: i32 = 0;

// ---------------------------------------------------------------------------
// DistanceMap
// ---------------------------------------------------------------------------

/// The dynamic layer of a pathfinding grid.
///
/// Holds one integer label per cell: [`BLOCKED`] for obstacles,
/// [`UNVISITED`] for cells the last wave did not reach, and
/// `1 + hop count` for reached cells, so the source is labelled `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMap {
    pub(crate) size: Size,
    pub(crate) labels: Vec<i32>,
}

impl DistanceMap {
    /// Create an all-[`UNVISITED`] map.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            labels: vec![UNVISITED; size.len()],
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Raw labels in row-major order.
    #[inline]
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Label at `p`, or [`BLOCKED`] outside the map.
    #[inline]
    pub fn label_at(&self, p: Pos) -> i32 {
        match self.size.index(p) {
            Some(i) => self.labels[i],
            None => BLOCKED,
        }
    }

    /// Overwrite the label at `p`. Does nothing if out of bounds.
    pub fn set_label(&mut self, p: Pos, label: i32) {
        if let Some(i) = self.size.index(p) {
            self.labels[i] = label;
        }
    }

    /// Label rows as slices, for display.
    pub fn lines(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.labels.chunks(self.size.cols.max(1))
    }
}
