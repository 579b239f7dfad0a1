use std::collections::BinaryHeap;

use mazepath_core::{Position, TerrainGrid};

use crate::traits::{AstarPather, Pather, WeightedPather};
use crate::{CostModel, Endpoint, PathError, Route};

/// Remaining-cost estimate used to order the search frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// The edge-cost formula applied to `(node, goal)`: Manhattan distance
    /// plus the floored mean of both terrain costs.
    ///
    /// Because intermediate terrain may be costlier than either endpoint,
    /// this can overestimate, so the returned route is not guaranteed to be
    /// the cheapest one.
    #[default]
    Combined,
    /// Plain Manhattan distance. Every move costs at least 1, so this never
    /// overestimates and the search returns a cheapest route.
    Manhattan,
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions taken off the frontier and expanded.
    pub expanded: usize,
    /// Frontier insertions, re-insertions included.
    pub pushed: usize,
    /// Outdated frontier entries discarded on pop.
    pub stale: usize,
}

// ---------------------------------------------------------------------------
// Internal search node and frontier entry
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    g: u64,
    f: u64,
    parent: usize,
    scored: bool,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            scored: false,
            open: false,
        }
    }
}

/// Frontier entry, ordered by `f` then by position for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    pos: Position,
    f: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, row, col) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Generic search
// ---------------------------------------------------------------------------

/// Best-first search from `from` to `to` over the cells of `grid`, using
/// `pather` for neighbours, edge costs and estimates.
///
/// Returns the full route (both endpoints included) or an empty route if
/// the frontier runs out first. Endpoint passability is the caller's
/// concern; only bounds are checked here.
///
/// Outdated frontier entries are not removed when a position is re-scored;
/// they are recognised and skipped when popped.
pub fn astar_path<P: AstarPather>(
    pather: &P,
    grid: &TerrainGrid,
    from: Position,
    to: Position,
) -> Result<(Route, SearchStats), PathError> {
    let start_idx = grid.index(from).ok_or(PathError::InvalidEndpoint {
        endpoint: Endpoint::Start,
        pos: from,
    })?;
    let goal_idx = grid.index(to).ok_or(PathError::InvalidEndpoint {
        endpoint: Endpoint::Goal,
        pos: to,
    })?;

    let mut stats = SearchStats::default();
    let mut nodes = vec![Node::default(); grid.len()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

    {
        let f = pather.estimate(from, to)?;
        let node = &mut nodes[start_idx];
        node.g = 0;
        node.f = f;
        node.scored = true;
        node.open = true;
        open.push(NodeRef {
            idx: start_idx,
            pos: from,
            f,
        });
        stats.pushed += 1;
    }

    let mut nbuf = Vec::with_capacity(4);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;

        // Skip stale entries.
        if !nodes[ci].open || nodes[ci].f != current.f {
            stats.stale += 1;
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        nodes[ci].open = false;
        stats.expanded += 1;
        let current_g = nodes[ci].g;

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            let tentative_g = current_g.saturating_add(pather.cost(current.pos, np)?);
            if nodes[ni].scored && tentative_g >= nodes[ni].g {
                continue;
            }
            let f = tentative_g.saturating_add(pather.estimate(np, to)?);

            let n = &mut nodes[ni];
            n.g = tentative_g;
            n.f = f;
            n.parent = ci;
            n.scored = true;
            n.open = true;

            open.push(NodeRef { idx: ni, pos: np, f });
            stats.pushed += 1;
        }
    };

    if !found {
        return Ok((Route::empty(), stats));
    }

    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != usize::MAX {
        path.push(grid.position(ci));
        ci = nodes[ci].parent;
    }
    path.reverse();
    Ok((Route::from(path), stats))
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Route search over a [`TerrainGrid`] weighted by a [`CostModel`].
///
/// Holds only shared references; every query builds its own search state,
/// so one grid and cost model can serve many finders at once.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    grid: &'a TerrainGrid,
    costs: &'a CostModel,
    heuristic: Heuristic,
}

impl<'a> PathFinder<'a> {
    /// Create a finder using the [`Heuristic::Combined`] estimate.
    pub fn new(grid: &'a TerrainGrid, costs: &'a CostModel) -> Self {
        Self {
            grid,
            costs,
            heuristic: Heuristic::default(),
        }
    }

    /// Use `heuristic` to order the frontier.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn grid(&self) -> &'a TerrainGrid {
        self.grid
    }

    /// Manhattan distance between `a` and `b` plus the floor of the mean of
    /// their terrain costs.
    ///
    /// Computed in `u64`, so it holds for any pair of `u32` terrain costs.
    pub fn step_cost(&self, a: Position, b: Position) -> Result<u64, PathError> {
        let ca = u64::from(self.costs.cost_of(self.grid.terrain_at(a)?)?);
        let cb = u64::from(self.costs.cost_of(self.grid.terrain_at(b)?)?);
        Ok(u64::from(a.manhattan(b)) + (ca + cb) / 2)
    }

    /// Total of [`step_cost`](Self::step_cost) over consecutive pairs of
    /// `route`.
    pub fn route_cost(&self, route: &Route) -> Result<u64, PathError> {
        route
            .positions()
            .windows(2)
            .try_fold(0u64, |acc, w| -> Result<u64, PathError> {
                Ok(acc.saturating_add(self.step_cost(w[0], w[1])?))
            })
    }

    /// Find a route from `start` to `goal`.
    ///
    /// Fails with [`PathError::InvalidEndpoint`] if either endpoint is out of
    /// bounds or a wall. An unreachable goal yields an empty route.
    pub fn find_path(&self, start: Position, goal: Position) -> Result<Route, PathError> {
        self.find_path_with_stats(start, goal).map(|(route, _)| route)
    }

    /// Like [`find_path`](Self::find_path), also reporting search counters.
    pub fn find_path_with_stats(
        &self,
        start: Position,
        goal: Position,
    ) -> Result<(Route, SearchStats), PathError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::Goal, goal)?;
        astar_path(self, self.grid, start, goal)
    }

    fn check_endpoint(&self, endpoint: Endpoint, pos: Position) -> Result<(), PathError> {
        if self.grid.is_passable(pos) {
            Ok(())
        } else {
            Err(PathError::InvalidEndpoint { endpoint, pos })
        }
    }
}

impl Pather for PathFinder<'_> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        self.grid.neighbors_into(p, buf);
        buf.retain(|&n| self.grid.is_passable(n));
    }
}

impl WeightedPather for PathFinder<'_> {
    fn cost(&self, from: Position, to: Position) -> Result<u64, PathError> {
        self.step_cost(from, to)
    }
}

impl AstarPather for PathFinder<'_> {
    fn estimate(&self, from: Position, to: Position) -> Result<u64, PathError> {
        match self.heuristic {
            Heuristic::Combined => self.step_cost(from, to),
            Heuristic::Manhattan => Ok(u64::from(from.manhattan(to))),
        }
    }
}

/// Find a route from `start` to `goal` with the default heuristic.
pub fn find_path(
    grid: &TerrainGrid,
    costs: &CostModel,
    start: Position,
    goal: Position,
) -> Result<Route, PathError> {
    PathFinder::new(grid, costs).find_path(start, goal)
}
