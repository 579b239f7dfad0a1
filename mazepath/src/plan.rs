//! Resolve endpoints, search, and summarize the result.

use std::collections::BTreeSet;
use std::fmt;

use mazepath_core::{Position, TerrainCode, TerrainGrid};
use mazepath_paths::{PathError, PathFinder, Route, SearchStats, encode_string};

use crate::config::RouteConfig;

/// Outcome of a planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub start: Position,
    pub goal: Position,
    /// Empty when the goal cannot be reached.
    pub route: Route,
    /// The route as direction symbols.
    pub directions: String,
    /// Reward cells lying on the route.
    pub rewards: BTreeSet<Position>,
    /// Sum of step costs along the route.
    pub cost: u64,
    pub stats: SearchStats,
}

impl Plan {
    /// Number of cells on the route, endpoints included.
    pub fn total_steps(&self) -> usize {
        self.route.len()
    }
}

/// Errors that can occur while planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// No cell carries the marker code.
    MissingMarker(TerrainCode),
    /// The marker code appears on more than one cell.
    AmbiguousMarker { code: TerrainCode, count: usize },
    Path(PathError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMarker(code) => write!(f, "no cell with terrain {code} in the grid"),
            Self::AmbiguousMarker { code, count } => {
                write!(f, "terrain {code} marks {count} cells, expected exactly one")
            }
            Self::Path(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PathError> for PlanError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

/// The single cell holding `code`.
pub fn locate(grid: &TerrainGrid, code: TerrainCode) -> Result<Position, PlanError> {
    let cells = grid.find_all(code);
    let mut iter = cells.iter();
    match (iter.next(), iter.next()) {
        (Some(&p), None) => Ok(p),
        (None, _) => Err(PlanError::MissingMarker(code)),
        (Some(_), Some(_)) => Err(PlanError::AmbiguousMarker {
            code,
            count: cells.len(),
        }),
    }
}

/// Run the search described by `config` over `grid`.
pub fn plan(grid: &TerrainGrid, config: &RouteConfig) -> Result<Plan, PlanError> {
    let start = match config.start {
        Some(p) => p,
        None => locate(grid, config.start_code)?,
    };
    let goal = locate(grid, config.goal_code)?;

    let costs = config.cost_model();
    let finder = PathFinder::new(grid, &costs).with_heuristic(config.heuristic);
    log::info!("planning from {start} to {goal} ({:?} heuristic)", finder.heuristic());
    let (route, stats) = finder.find_path_with_stats(start, goal)?;
    log::debug!(
        "search expanded {} cells, pushed {}, skipped {} stale",
        stats.expanded,
        stats.pushed,
        stats.stale
    );
    if route.is_empty() {
        log::warn!("goal {goal} is unreachable from {start}");
    }

    let directions = encode_string(&route, config.symbols)?;
    let cost = finder.route_cost(&route)?;
    let rewards = grid
        .find_all(config.reward_code)
        .intersection(&route.to_set())
        .copied()
        .collect();

    Ok(Plan {
        start,
        goal,
        route,
        directions,
        rewards,
        cost,
        stats,
    })
}
