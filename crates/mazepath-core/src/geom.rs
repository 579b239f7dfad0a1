//! Geometry primitives: [`Position`] and [`Direction`].
//!
//! Positions are `(row, col)` pairs with the origin in the top-left corner;
//! rows grow downwards (south) and columns grow rightwards (east).

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid cell address. Ordered by row first, then column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Component-wise `self - rhs`, or `None` if either coordinate
    /// overflows.
    #[inline]
    pub fn checked_sub(self, rhs: Position) -> Option<Self> {
        Some(Self::new(
            self.row.checked_sub(rhs.row)?,
            self.col.checked_sub(rhs.col)?,
        ))
    }

    /// The neighbouring position one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// The four cardinal neighbours, in [`Direction::ALL`] order.
    /// No bounds filtering is applied.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal unit steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in neighbour enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset as a `(drow, dcol)` position.
    #[inline]
    pub const fn delta(self) -> Position {
        match self {
            Direction::North => Position::new(-1, 0),
            Direction::South => Position::new(1, 0),
            Direction::East => Position::new(0, 1),
            Direction::West => Position::new(0, -1),
        }
    }

    /// The direction whose delta is `d`, if `d` is a unit cardinal step.
    pub fn from_delta(d: Position) -> Option<Self> {
        match (d.row, d.col) {
            (-1, 0) => Some(Direction::North),
            (1, 0) => Some(Direction::South),
            (0, 1) => Some(Direction::East),
            (0, -1) => Some(Direction::West),
            _ => None,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_ordering_is_row_major() {
        let mut ps = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        ps.sort();
        assert_eq!(
            ps,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn manhattan_distance() {
        let a = Position::new(2, -3);
        let b = Position::new(-1, 4);
        assert_eq!(a.manhattan(b), 10);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn direction_delta_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_delta(d.delta()), Some(d));
            assert_eq!(d.delta() + d.reverse().delta(), Position::ZERO);
        }
        assert_eq!(Direction::from_delta(Position::new(1, 1)), None);
        assert_eq!(Direction::from_delta(Position::new(0, 2)), None);
        assert_eq!(Direction::from_delta(Position::ZERO), None);
    }

    #[test]
    fn checked_sub_detects_overflow() {
        let a = Position::new(3, -2);
        let b = Position::new(1, 4);
        assert_eq!(a.checked_sub(b), Some(a - b));
        assert_eq!(
            Position::new(i32::MAX, 0).checked_sub(Position::new(i32::MIN, 0)),
            None
        );
        assert_eq!(
            Position::new(0, i32::MIN).checked_sub(Position::new(0, 1)),
            None
        );
    }

    #[test]
    fn neighbors_follow_direction_order() {
        let p = Position::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Position::new(4, 5),
                Position::new(6, 5),
                Position::new(5, 6),
                Position::new(5, 4),
            ]
        );
    }
}
