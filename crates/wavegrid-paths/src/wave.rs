//! Breadth-first wave propagation.

use std::collections::VecDeque;

use wavegrid_core::Pos;

use crate::distmap::{BLOCKED, DistanceMap, PathNode, UNVISITED};
use crate::neighbors::{Movement, Neighbors};
use crate::traits::Terrain;

impl DistanceMap {
    /// Reinitialize labels from `terrain`: [`BLOCKED`] for impassable cells,
    /// [`UNVISITED`] for the rest. Adopts the terrain's size.
    pub fn reset<T: Terrain>(&mut self, terrain: &T) {
        let size = terrain.size();
        if size != self.size {
            self.size = size;
            self.labels.clear();
            self.labels.resize(size.len(), UNVISITED);
        }
        for (i, label) in self.labels.iter_mut().enumerate() {
            *label = if terrain.passable(size.pos(i)) {
                UNVISITED
            } else {
                BLOCKED
            };
        }
    }

    /// Reset the map and run a wave from `source`.
    ///
    /// Every reached cell gets label `1 + hop count`. When `target` is given
    /// and `stop_at_target` is set, the wave stops as soon as the target is
    /// dequeued; otherwise it runs until the queue is empty. An impassable
    /// source labels nothing.
    ///
    /// Returns the number of labelled cells.
    pub fn propagate<T: Terrain>(
        &mut self,
        terrain: &T,
        source: Pos,
        target: Option<Pos>,
        movement: Movement,
        stop_at_target: bool,
    ) -> usize {
        self.reset(terrain);
        let Some(si) = self.size.index(source) else {
            return 0;
        };
        if self.labels[si] == BLOCKED {
            return 0;
        }
        self.labels[si] = 1;
        let mut labelled = 1;

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);
        let mut nb = Neighbors::new(movement);

        while let Some(ci) = queue.pop_front() {
            let cp = self.size.pos(ci);
            if stop_at_target && target == Some(cp) {
                break;
            }
            let next = self.labels[ci] + 1;

            for &np in nb.around(cp, |p| terrain.passable(p)) {
                let Some(ni) = self.size.index(np) else {
                    continue;
                };
                if self.labels[ni] != UNVISITED {
                    continue;
                }
                self.labels[ni] = next;
                queue.push_back(ni);
                labelled += 1;
            }
        }

        labelled
    }

    /// Reset the map and label every cell within `max_distance` hops of
    /// `source`.
    ///
    /// Cells further away stay [`UNVISITED`]. Returns the reached cells in
    /// discovery order, source first.
    pub fn flood_fill<T: Terrain>(
        &mut self,
        terrain: &T,
        source: Pos,
        max_distance: usize,
        movement: Movement,
    ) -> Vec<PathNode> {
        self.reset(terrain);
        let mut reached = Vec::new();
        let Some(si) = self.size.index(source) else {
            return reached;
        };
        if self.labels[si] == BLOCKED {
            return reached;
        }
        self.labels[si] = 1;
        reached.push(PathNode {
            pos: source,
            distance: 0,
        });

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);
        let mut nb = Neighbors::new(movement);

        while let Some(ci) = queue.pop_front() {
            let cp = self.size.pos(ci);
            let current = self.labels[ci];
            // Labels are distance + 1, so the next ring sits at distance `current`.
            let nd = current as usize;
            if nd > max_distance {
                continue;
            }

            for &np in nb.around(cp, |p| terrain.passable(p)) {
                let Some(ni) = self.size.index(np) else {
                    continue;
                };
                if self.labels[ni] != UNVISITED {
                    continue;
                }
                self.labels[ni] = current + 1;
                queue.push_back(ni);
                reached.push(PathNode { pos: np, distance: nd });
            }
        }

        reached
    }
}
