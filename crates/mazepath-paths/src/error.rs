use std::fmt;

use mazepath_core::{GridError, Position, TerrainCode};

/// Which end of a route request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that can occur while costing, searching or encoding a route.
///
/// Finding no route is not an error: the search returns an empty
/// [`Route`](crate::Route) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The cost model has no entry for this terrain code.
    UnknownTerrain(TerrainCode),
    /// A search endpoint is out of bounds or a wall.
    InvalidEndpoint { endpoint: Endpoint, pos: Position },
    /// Two consecutive route positions are not one cardinal step apart.
    InvalidStep {
        index: usize,
        from: Position,
        to: Position,
    },
    /// A grid query failed.
    Grid(GridError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTerrain(code) => write!(f, "no cost registered for terrain {code}"),
            Self::InvalidEndpoint { endpoint, pos } => {
                write!(f, "{endpoint} {pos} is out of bounds or impassable")
            }
            Self::InvalidStep { index, from, to } => {
                write!(f, "route step {index} from {from} to {to} is not a cardinal move")
            }
            Self::Grid(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
