use mazepath_core::Position;

use crate::PathError;

/// Minimal pathfinding interface: provides neighbor enumeration.
pub trait Pather {
    /// Append the traversable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: Position, to: Position) -> Result<u64, PathError>;
}

/// Pather with a remaining-cost estimate for best-first search.
///
/// The estimate is not required to be admissible; an overestimating
/// heuristic trades optimality for a more greedy search.
pub trait AstarPather: WeightedPather {
    /// Estimated cost of the remaining route from `from` to `to`.
    fn estimate(&self, from: Position, to: Position) -> Result<u64, PathError>;
}
