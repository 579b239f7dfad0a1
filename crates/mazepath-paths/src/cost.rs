//! Terrain traversal costs.

use mazepath_core::TerrainCode;
use mazepath_core::terrain::{
    BONFIRE, BOSS, FOUNTAIN, LANDMARK, MONSTER, PASSAGE, TREASURE, WALL,
};

use crate::PathError;

/// Reference costs of the standard palette.
///
/// The wall entry is never used for traversal; it exists so that a lookup on
/// a wall cell does not fail.
const STANDARD_COSTS: [(TerrainCode, u32); 8] = [
    (WALL, 6),
    (BOSS, 0),
    (LANDMARK, 6),
    (FOUNTAIN, 0),
    (MONSTER, 10),
    (BONFIRE, 2),
    (TREASURE, 1),
    (PASSAGE, 1),
];

/// Mapping from terrain code to a non-negative movement cost.
///
/// Backed by a fixed table indexed by the code value, so lookups never
/// allocate and the model can be shared freely between searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostModel {
    table: [Option<u32>; 256],
}

impl Default for CostModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl CostModel {
    /// A model with no registered costs.
    pub const fn empty() -> Self {
        Self { table: [None; 256] }
    }

    /// The reference cost table.
    pub const fn standard() -> Self {
        let mut table = [None; 256];
        let mut i = 0;
        while i < STANDARD_COSTS.len() {
            let (code, cost) = STANDARD_COSTS[i];
            table[code.0 as usize] = Some(cost);
            i += 1;
        }
        Self { table }
    }

    /// Return this model with `code` registered at `cost`, replacing any
    /// previous entry.
    pub fn with_cost(mut self, code: TerrainCode, cost: u32) -> Self {
        self.set_cost(code, cost);
        self
    }

    /// Register `code` at `cost`, replacing any previous entry.
    pub fn set_cost(&mut self, code: TerrainCode, cost: u32) {
        self.table[code.0 as usize] = Some(cost);
    }

    /// Traversal cost of `code`.
    #[inline]
    pub fn cost_of(&self, code: TerrainCode) -> Result<u32, PathError> {
        self.table[code.0 as usize].ok_or(PathError::UnknownTerrain(code))
    }

    /// Whether `code` has a registered cost.
    #[inline]
    pub fn is_registered(&self, code: TerrainCode) -> bool {
        self.table[code.0 as usize].is_some()
    }

    /// Registered `(code, cost)` pairs in ascending code order.
    pub fn entries(&self) -> impl Iterator<Item = (TerrainCode, u32)> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|cost| (TerrainCode(i as u8), cost)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_costs() {
        let m = CostModel::standard();
        assert_eq!(m.cost_of(BOSS), Ok(0));
        assert_eq!(m.cost_of(PASSAGE), Ok(1));
        assert_eq!(m.cost_of(FOUNTAIN), Ok(0));
        assert_eq!(m.cost_of(MONSTER), Ok(10));
        assert_eq!(m.cost_of(BONFIRE), Ok(2));
        assert_eq!(m.cost_of(TREASURE), Ok(1));
        assert_eq!(m.cost_of(LANDMARK), Ok(6));
        // present even though never traversed
        assert!(m.cost_of(WALL).is_ok());
    }

    #[test]
    fn unknown_terrain() {
        let m = CostModel::standard();
        assert_eq!(
            m.cost_of(TerrainCode(7)),
            Err(PathError::UnknownTerrain(TerrainCode(7)))
        );
        assert!(!m.is_registered(TerrainCode(8)));
        assert!(CostModel::empty().cost_of(PASSAGE).is_err());
    }

    #[test]
    fn overrides_replace_entries() {
        let m = CostModel::standard()
            .with_cost(MONSTER, 3)
            .with_cost(TerrainCode(7), 4);
        assert_eq!(m.cost_of(MONSTER), Ok(3));
        assert_eq!(m.cost_of(TerrainCode(7)), Ok(4));
        assert_eq!(m.entries().count(), 9);
        assert_eq!(m.entries().next(), Some((WALL, 6)));
    }
}
