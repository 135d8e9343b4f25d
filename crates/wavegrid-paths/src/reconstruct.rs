//! Backward path reconstruction over a labelled [`DistanceMap`].

use std::fmt;

use wavegrid_core::Pos;

use crate::distmap::{DistanceMap, UNVISITED};
use crate::neighbors::Movement;

impl DistanceMap {
    /// Rebuild a shortest path from `source` to `target`.
    ///
    /// Starting at the target, repeatedly steps to the first neighbour (in
    /// `movement` offset order) whose label is exactly one less, until the
    /// source is reached. `movement` must be the one the wave ran with.
    pub fn reconstruct(
        &self,
        source: Pos,
        target: Pos,
        movement: Movement,
    ) -> Result<Vec<Pos>, ReconstructError> {
        if self.label_at(target) <= UNVISITED {
            return Err(ReconstructError::TargetUnlabelled(target));
        }

        let mut path = vec![target];
        let mut current = target;
        while current != source {
            let label = self.label_at(current);
            // Only the source carries label 1; anything below means the map
            // was not produced by a wave from `source`.
            let step = if label > 1 {
                movement
                    .offsets()
                    .iter()
                    .map(|&d| current + d)
                    .find(|&n| self.label_at(n) == label - 1)
            } else {
                None
            };
            let Some(next) = step else {
                return Err(ReconstructError::Stuck { at: current, label });
            };
            path.push(next);
            current = next;
        }

        path.reverse();
        Ok(path)
    }
}

/// The labels do not describe a wave from the requested source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructError {
    /// The target was never reached.
    TargetUnlabelled(Pos),
    /// No neighbour carries the next lower label.
    Stuck { at: Pos, label: i32 },
}

impl fmt::Display for ReconstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetUnlabelled(p) => write!(f, "reconstruct: target {p} carries no label"),
            Self::Stuck { at, label } => write!(
                f,
                "reconstruct: no neighbour of {at} carries label {}",
                label - 1
            ),
        }
    }
}

impl std::error::Error for ReconstructError {}

#[cfg(test)]
mod tests {
    use super::*;
    use wavegrid_core::{Grid, Size};

    fn labelled(g: &Grid, source: Pos, movement: Movement) -> DistanceMap {
        let mut m = DistanceMap::default();
        m.propagate(g, source, None, movement, false);
        m
    }

    #[test]
    fn straight_line() {
        let g = Grid::new(1, 4);
        let m = labelled(&g, Pos::ZERO, Movement::Cardinal);
        let path = m
            .reconstruct(Pos::ZERO, Pos::new(0, 3), Movement::Cardinal)
            .unwrap();
        assert_eq!(
            path,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]
        );
    }

    #[test]
    fn ties_follow_offset_order() {
        // (1,0) and (0,1) both carry label 2; left is tried before up.
        let g = Grid::new(2, 2);
        let m = labelled(&g, Pos::ZERO, Movement::Cardinal);
        let path = m
            .reconstruct(Pos::ZERO, Pos::new(1, 1), Movement::Cardinal)
            .unwrap();
        assert_eq!(path, vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn diagonal_shortcut() {
        let g = Grid::new(3, 3);
        let m = labelled(&g, Pos::ZERO, Movement::Diagonal);
        let path = m
            .reconstruct(Pos::ZERO, Pos::new(2, 2), Movement::Diagonal)
            .unwrap();
        assert_eq!(path, vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]);
    }

    #[test]
    fn source_equals_target() {
        let g = Grid::new(2, 2);
        let m = labelled(&g, Pos::new(1, 1), Movement::Cardinal);
        let path = m
            .reconstruct(Pos::new(1, 1), Pos::new(1, 1), Movement::Cardinal)
            .unwrap();
        assert_eq!(path, vec![Pos::new(1, 1)]);
    }

    #[test]
    fn unlabelled_target() {
        let mut g = Grid::new(1, 3);
        g.set_obstacle(Pos::new(0, 1));
        let m = labelled(&g, Pos::ZERO, Movement::Cardinal);
        assert_eq!(
            m.reconstruct(Pos::ZERO, Pos::new(0, 2), Movement::Cardinal),
            Err(ReconstructError::TargetUnlabelled(Pos::new(0, 2)))
        );
    }

    #[test]
    fn corrupted_labels_get_stuck() {
        let g = Grid::new(1, 4);
        let mut m = labelled(&g, Pos::ZERO, Movement::Cardinal);
        m.set_label(Pos::new(0, 2), 9);
        assert_eq!(
            m.reconstruct(Pos::ZERO, Pos::new(0, 3), Movement::Cardinal),
            Err(ReconstructError::Stuck {
                at: Pos::new(0, 3),
                label: 4
            })
        );
    }

    #[test]
    fn wrong_source_gets_stuck() {
        let g = Grid::new(1, 4);
        let m = labelled(&g, Pos::ZERO, Movement::Cardinal);
        let err = m
            .reconstruct(Pos::new(0, 1), Pos::new(0, 0), Movement::Cardinal)
            .unwrap_err();
        assert_eq!(
            err,
            ReconstructError::Stuck {
                at: Pos::ZERO,
                label: 1
            }
        );
        assert!(err.to_string().contains("label 0"));
    }

    #[test]
    fn empty_map() {
        let m = DistanceMap::new(Size::new(0, 0));
        assert!(m.reconstruct(Pos::ZERO, Pos::ZERO, Movement::Cardinal).is_err());
    }
}
