//! Plain-text grid format.
//!
//! ```text
//! 3 4
//! -2 0 0 0
//! 0 -1 -1 0
//! 0 0 0 -3
//! ```
//!
//! The header holds `rows cols`; each following line holds `cols` integer
//! codes: `0` empty, `-1` obstacle, `-2` start, `-3` target. Unknown codes
//! load as empty. Only classifications are stored, never distance labels.

use std::fmt;
use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::cell::CellKind;
use crate::geom::Pos;
use crate::grid::Grid;

/// Integer code of a cell kind in the text format.
pub const fn encode(kind: CellKind) -> i32 {
    match kind {
        CellKind::Empty => 0,
        CellKind::Obstacle => -1,
        CellKind::Start => -2,
        CellKind::Target => -3,
    }
}

/// Cell kind for an integer code. Unknown codes decode as empty.
pub const fn decode(code: i32) -> CellKind {
    match code {
        -1 => CellKind::Obstacle,
        -2 => CellKind::Start,
        -3 => CellKind::Target,
        _ => CellKind::Empty,
    }
}

/// Serialize a grid's classifications.
pub fn to_text(grid: &Grid) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{} {}", grid.rows(), grid.cols());
    for line in grid.lines() {
        let codes: Vec<String> = line.iter().map(|&k| encode(k).to_string()).collect();
        let _ = writeln!(out, "{}", codes.join(" "));
    }
    out
}

/// Parse a grid from the text format.
///
/// Tokens may be separated by any whitespace; line breaks carry no meaning
/// beyond that.
pub fn from_text(text: &str) -> Result<Grid, FormatError> {
    let mut tokens = text.split_whitespace();
    let rows = dimension(tokens.next())?;
    let cols = dimension(tokens.next())?;
    let invalid = FormatError::InvalidDimensions { rows, cols };
    let max = i64::from(i32::MAX);
    if rows <= 0 || cols <= 0 || rows > max || cols > max {
        return Err(invalid);
    }
    let (rows, cols) = (rows as usize, cols as usize);
    let Some(expected) = rows.checked_mul(cols) else {
        return Err(invalid);
    };

    // The grid is only allocated once the body has all its codes.
    let codes = tokens
        .take(expected)
        .map(parse_int)
        .collect::<Result<Vec<_>, _>>()?;
    if codes.len() < expected {
        return Err(FormatError::MissingCells {
            expected,
            found: codes.len(),
        });
    }

    let mut grid = Grid::new(rows, cols);
    for (i, code) in codes.into_iter().enumerate() {
        let p = Pos::new((i / cols) as i32, (i % cols) as i32);
        grid.set(p, decode(code));
    }
    Ok(grid)
}

/// Load a grid from a file.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, FormatError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let grid = from_text(&text)?;
    log::debug!("loaded {} grid from {}", grid.size(), path.display());
    Ok(grid)
}

/// Save a grid to a file, overwriting it.
pub fn save(grid: &Grid, path: impl AsRef<Path>) -> Result<(), FormatError> {
    std::fs::write(path, to_text(grid))?;
    Ok(())
}

fn dimension(tok: Option<&str>) -> Result<i64, FormatError> {
    let tok = tok.ok_or(FormatError::MissingHeader)?;
    tok.parse()
        .map_err(|_| FormatError::InvalidToken(tok.to_string()))
}

fn parse_int(tok: &str) -> Result<i32, FormatError> {
    tok.parse()
        .map_err(|_| FormatError::InvalidToken(tok.to_string()))
}

/// Errors that can occur when reading or writing the text format.
#[derive(Debug)]
pub enum FormatError {
    /// The underlying file could not be read or written.
    Io(io::Error),
    /// The `rows cols` header is missing or truncated.
    MissingHeader,
    /// A token is not an integer.
    InvalidToken(String),
    /// Rows or columns are not positive or too large to address.
    InvalidDimensions { rows: i64, cols: i64 },
    /// Fewer cell codes than `rows × cols`.
    MissingCells { expected: usize, found: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "grid file: {e}"),
            Self::MissingHeader => f.write_str("grid file: missing `rows cols` header"),
            Self::InvalidToken(t) => write!(f, "grid file: invalid integer \u{201c}{t}\u{201d}"),
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid file: invalid grid dimensions {rows}x{cols}")
            }
            Self::MissingCells { expected, found } => {
                write!(f, "grid file: expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FormatError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        let mut g = Grid::new(3, 4);
        g.set_start(Pos::new(0, 0));
        g.set_target(Pos::new(2, 3));
        g.set_obstacle(Pos::new(1, 1));
        g.set_obstacle(Pos::new(1, 2));
        g
    }

    #[test]
    fn writes_expected_text() {
        assert_eq!(to_text(&sample()), "3 4\n-2 0 0 0\n0 -1 -1 0\n0 0 0 -3\n");
    }

    #[test]
    fn text_round_trip() {
        let g = sample();
        let back = from_text(&to_text(&g)).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.start(), Some(Pos::new(0, 0)));
        assert_eq!(back.target(), Some(Pos::new(2, 3)));
    }

    #[test]
    fn unknown_codes_are_empty() {
        let g = from_text("1 3\n5 -1 -9").unwrap();
        assert_eq!(g.get(Pos::new(0, 0)), CellKind::Empty);
        assert_eq!(g.get(Pos::new(0, 1)), CellKind::Obstacle);
        assert_eq!(g.get(Pos::new(0, 2)), CellKind::Empty);
    }

    #[test]
    fn whitespace_is_free_form() {
        let g = from_text("2 2 0 -1\n\n  -2    -3").unwrap();
        assert_eq!(g.get(Pos::new(0, 1)), CellKind::Obstacle);
        assert_eq!(g.start(), Some(Pos::new(1, 0)));
        assert_eq!(g.target(), Some(Pos::new(1, 1)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(from_text(""), Err(FormatError::MissingHeader)));
        assert!(matches!(from_text("3"), Err(FormatError::MissingHeader)));
        assert!(matches!(
            from_text("0 3"),
            Err(FormatError::InvalidDimensions { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            from_text("2 -2"),
            Err(FormatError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            from_text("2 2\n0 0 x 0"),
            Err(FormatError::InvalidToken(t)) if t == "x"
        ));
        assert!(matches!(
            from_text("2 2\n0 0 0"),
            Err(FormatError::MissingCells {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn oversized_header_is_an_error() {
        assert!(matches!(
            from_text("5000000000 5000000000\n0"),
            Err(FormatError::InvalidDimensions {
                rows: 5_000_000_000,
                cols: 5_000_000_000
            })
        ));
        assert!(matches!(
            from_text("1 2147483648"),
            Err(FormatError::InvalidDimensions { .. })
        ));
        // A header far larger than its body fails on the cell count.
        assert!(matches!(
            from_text("100000 100000\n0 -1"),
            Err(FormatError::MissingCells { found: 2, .. })
        ));
    }

    #[test]
    fn codes_match_format() {
        for kind in [
            CellKind::Empty,
            CellKind::Obstacle,
            CellKind::Start,
            CellKind::Target,
        ] {
            assert_eq!(decode(encode(kind)), kind);
        }
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("wavegrid-format-{}.txt", std::process::id()));
        let g = sample();
        save(&g, &path).unwrap();
        let back = load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, g);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load("/nonexistent/wavegrid/grid.txt").unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
