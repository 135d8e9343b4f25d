use wavegrid_core::{Grid, Pos, Size};

/// Minimal terrain interface for wave propagation.
pub trait Terrain {
    /// Dimensions of the labelled area.
    fn size(&self) -> Size;

    /// Whether a walker may enter `p`. Must be `false` outside [`size`](Self::size).
    fn passable(&self, p: Pos) -> bool;
}

impl Terrain for Grid {
    #[inline]
    fn size(&self) -> Size {
        Grid::size(self)
    }

    #[inline]
    fn passable(&self, p: Pos) -> bool {
        self.is_passable(p)
    }
}
