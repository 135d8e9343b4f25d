//! Grid generation and analysis utilities for *wavegrid*: maze carving,
//! ASCII layouts, ready-made grids and path measurements.

pub mod analysis;
pub mod layout;
pub mod mapgen;
pub mod presets;

pub use analysis::{bottlenecks, path_efficiency};
pub use layout::{Layout, LayoutError};
pub use mapgen::MazeGen;
pub use presets::{maze_grid, simple_grid};
