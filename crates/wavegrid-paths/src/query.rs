//! Read-only queries over a labelled [`DistanceMap`].

use wavegrid_core::Pos;

use crate::distmap::DistanceMap;

impl DistanceMap {
    /// True distance from the last wave's source to `p`.
    ///
    /// `None` if `p` is outside the map, an obstacle, or was not reached.
    #[inline]
    pub fn distance_at(&self, p: Pos) -> Option<usize> {
        let label = self.label_at(p);
        (label > 0).then(|| (label - 1) as usize)
    }

    /// Whether the last wave reached `p`.
    #[inline]
    pub fn is_reached(&self, p: Pos) -> bool {
        self.label_at(p) > 0
    }

    /// Every cell whose true distance lies in `[0, max_distance]`, in
    /// row-major order.
    pub fn reachable_cells(&self, max_distance: usize) -> Vec<Pos> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label > 0 && (label - 1) as usize <= max_distance)
            .map(|(i, _)| self.size.pos(i))
            .collect()
    }

    /// Number of cells the last wave reached.
    pub fn reached_count(&self) -> usize {
        self.labels.iter().filter(|&&l| l > 0).count()
    }
}
