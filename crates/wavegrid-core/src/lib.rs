//! **wavegrid-core**: grid model for wave-propagation pathfinding.
//!
//! This crate provides the foundational types shared across *wavegrid*:
//! geometry primitives, cell classifications, the classification grid and
//! its plain-text file format.

pub mod cell;
pub mod format;
pub mod geom;
pub mod grid;

pub use cell::CellKind;
pub use format::FormatError;
pub use geom::{Pos, Size};
pub use grid::{Grid, GridError};
