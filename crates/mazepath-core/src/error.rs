use std::fmt;

use crate::geom::Position;

/// Errors raised while building or querying a [`TerrainGrid`](crate::TerrainGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A position query fell outside `[0, height) x [0, width)`.
    OutOfBounds {
        pos: Position,
        width: usize,
        height: usize,
    },
    /// Rows have inconsistent lengths.
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in a text grid is not a terrain digit.
    InvalidSymbol { ch: char, pos: Position },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} is outside the {width}x{height} grid")
            }
            Self::MalformedGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "grid contains invalid symbol \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
