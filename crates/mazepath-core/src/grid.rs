//! The [`TerrainGrid`] type: an immutable 2D array of [`TerrainCode`]s.
//!
//! The grid is built once, either from caller-provided rows or from the text
//! format accepted by [`TerrainGrid::parse`], and never changes afterwards.
//! It is plain owned data, so a single grid can be shared by reference
//! between any number of concurrent searches.

use std::collections::BTreeSet;

use crate::error::GridError;
use crate::geom::Position;
use crate::terrain::TerrainCode;

/// A rectangular, row-major grid of terrain codes with its origin at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<TerrainCode>>", into = "Vec<Vec<TerrainCode>>")
)]
pub struct TerrainGrid {
    cells: Vec<TerrainCode>,
    width: usize,
    height: usize,
}

impl TerrainGrid {
    /// Build a grid from rows of terrain codes.
    ///
    /// Fails with [`GridError::MalformedGrid`] if the rows do not all have the
    /// length of the first one.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = TerrainCode>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (row, codes) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(codes);
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::MalformedGrid {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        Ok(Self {
            cells,
            width: width.unwrap_or(0),
            height,
        })
    }

    /// Parse the text grid format: one line per row, one decimal digit per
    /// cell. Whitespace inside a line and blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<TerrainCode>> = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = rows.len() as i32;
            let mut codes = Vec::with_capacity(line.len());
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let Some(digit) = ch.to_digit(10) else {
                    return Err(GridError::InvalidSymbol {
                        ch,
                        pos: Position::new(row, codes.len() as i32),
                    });
                };
                codes.push(TerrainCode(digit as u8));
            }
            rows.push(codes);
        }
        Self::from_rows(rows)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` lies inside `[0, height) x [0, width)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Flat index of `pos`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Position of a flat index. The index must be below [`len`](Self::len).
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        Position::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    /// The terrain code at `pos`.
    pub fn terrain_at(&self, pos: Position) -> Result<TerrainCode, GridError> {
        self.index(pos)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
    }

    /// Whether `pos` is in bounds and not a wall.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| !self.cells[i].is_wall())
    }

    /// The in-bounds cardinal neighbours of `pos` (north, south, east, west).
    ///
    /// Passability is not checked.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(pos, &mut buf);
        buf
    }

    /// Like [`neighbors`](Self::neighbors) but appends into `buf`, which the
    /// caller clears beforehand.
    pub fn neighbors_into(&self, pos: Position, buf: &mut Vec<Position>) {
        buf.extend(pos.neighbors_4().into_iter().filter(|&n| self.contains(n)));
    }

    /// Every position whose terrain equals `code`.
    pub fn find_all(&self, code: TerrainCode) -> BTreeSet<Position> {
        self.iter()
            .filter(|&(_, c)| c == code)
            .map(|(p, _)| p)
            .collect()
    }

    /// Row-major iterator over `(Position, TerrainCode)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, TerrainCode)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.position(i), c))
    }

    /// Iterator over the rows as slices, one per row even when the grid
    /// has zero width.
    pub fn rows(&self) -> impl Iterator<Item = &[TerrainCode]> + '_ {
        (0..self.height).map(move |r| &self.cells[r * self.width..(r + 1) * self.width])
    }
}

impl TryFrom<Vec<Vec<TerrainCode>>> for TerrainGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<TerrainCode>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<TerrainGrid> for Vec<Vec<TerrainCode>> {
    fn from(grid: TerrainGrid) -> Self {
        grid.rows().map(<[TerrainCode]>::to_vec).collect()
    }
}

impl std::str::FromStr for TerrainGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_rows() {
        let g = TerrainGrid::parse("90\n09").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[9,0],[0,9]]");
        let back: TerrainGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn ragged_json_is_rejected() {
        let res: Result<TerrainGrid, _> = serde_json::from_str("[[9,0],[9]]");
        assert!(res.is_err());
    }
}
