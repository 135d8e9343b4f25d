//! Breadth-first wave pathfinding on 2D grids.
//!
//! A wave spreads from a source cell over passable neighbours, stamping
//! each cell with `1 + hop count` in a [`DistanceMap`]. From those labels
//! this crate provides:
//!
//! - **Shortest paths**, rebuilt backwards from the target
//!   ([`DistanceMap::reconstruct`])
//! - **Distance queries** for single cells ([`DistanceMap::distance_at`])
//! - **Bounded reachability** ([`DistanceMap::reachable_cells`],
//!   [`DistanceMap::flood_fill`])
//!
//! Movement is either 4-directional or 8-directional ([`Movement`]); the
//! neighbour order is fixed, so results are deterministic.
//!
//! [`Pathfinder`] bundles a [`Grid`](wavegrid_core::Grid) with the labels,
//! path and outcome of its last search.

mod config;
mod distmap;
mod neighbors;
mod pathfinder;
mod query;
mod reconstruct;
mod traits;
mod wave;

pub use config::SearchConfig;
pub use distmap::{BLOCKED, DistanceMap, PathNode, UNVISITED};
pub use neighbors::{ALL, CARDINAL, Direction, Movement, Neighbors, directions};
pub use pathfinder::Pathfinder;
pub use reconstruct::ReconstructError;
pub use traits::Terrain;
