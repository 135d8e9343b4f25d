//! Grids described as ASCII art.
//!
//! ```text
//! S#...
//! .#.#.
//! ...#T
//! ```
//!
//! `.` is empty, `#` an obstacle, `S` the start and `T` the target.

use std::fmt;

use wavegrid_core::{CellKind, Grid, Pos, Size};

/// Characters a [`Layout`] may contain.
pub const RUNES: &str = ".#ST";

/// A validated ASCII grid description.
///
/// Lines are separated by `'\n'` and must all have the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    content: String,
    size: Size,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string
    /// but not from individual lines.
    pub fn new(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut width: Option<usize> = None;
        let mut rows = 0;

        for (r, line) in s.split('\n').enumerate() {
            if let Some((c, ch)) = line.chars().enumerate().find(|&(_, ch)| !RUNES.contains(ch)) {
                return Err(LayoutError::InvalidRune {
                    ch,
                    pos: Pos::new(r as i32, c as i32),
                    content: s.to_string(),
                });
            }
            let w = line.chars().count();
            match width {
                Some(expected) if expected != w => {
                    return Err(LayoutError::InconsistentSize(s.to_string()));
                }
                _ => width = Some(w),
            }
            rows += 1;
        }

        let cols = width.unwrap_or(0);
        let rows = if cols == 0 { 0 } else { rows };
        Ok(Self {
            content: s.to_string(),
            size: Size::new(rows, cols),
        })
    }

    /// Describe an existing grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let content = grid
            .lines()
            .map(|line| line.iter().map(|&k| rune(k)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            content,
            size: grid.size(),
        }
    }

    /// Return the layout's textual content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Build the grid this layout describes.
    pub fn to_grid(&self) -> Grid {
        grid_from_lines(self.size, self.content.split('\n'))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Rune for a cell kind.
pub const fn rune(kind: CellKind) -> char {
    match kind {
        CellKind::Empty => '.',
        CellKind::Obstacle => '#',
        CellKind::Start => 'S',
        CellKind::Target => 'T',
    }
}

/// Cell kind for a rune; anything unknown is empty.
pub const fn kind(ch: char) -> CellKind {
    match ch {
        '#' => CellKind::Obstacle,
        'S' => CellKind::Start,
        'T' => CellKind::Target,
        _ => CellKind::Empty,
    }
}

pub(crate) fn grid_from_lines<'a>(size: Size, lines: impl Iterator<Item = &'a str>) -> Grid {
    let mut grid = Grid::new(size.rows, size.cols);
    for (r, line) in lines.enumerate() {
        for (c, ch) in line.chars().enumerate() {
            grid.set(Pos::new(r as i32, c as i32), kind(ch));
        }
    }
    grid
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside [`RUNES`] was found.
    InvalidRune { ch: char, pos: Pos, content: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}:\n{content}"
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}
