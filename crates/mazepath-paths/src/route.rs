use std::collections::BTreeSet;

use mazepath_core::Position;

/// An ordered sequence of positions from a start cell to a goal cell.
///
/// An empty route means no route exists. A route whose start equals its goal
/// holds exactly one position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route(Vec<Position>);

impl Route {
    /// The empty "no route" value.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of positions, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the "no route" value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves (one less than the number of positions).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Position> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Position> {
        self.0.last().copied()
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    pub fn contains(&self, p: Position) -> bool {
        self.0.contains(&p)
    }

    /// The visited cells as a set, for membership tests against other
    /// cell sets.
    pub fn to_set(&self) -> BTreeSet<Position> {
        self.0.iter().copied().collect()
    }
}

impl From<Vec<Position>> for Route {
    fn from(v: Vec<Position>) -> Self {
        Self(v)
    }
}

impl FromIterator<Position> for Route {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single() {
        let none = Route::empty();
        assert!(none.is_empty());
        assert_eq!(none.steps(), 0);
        assert_eq!(none.start(), None);

        let single = Route::from(vec![Position::new(2, 3)]);
        assert_eq!(single.len(), 1);
        assert_eq!(single.steps(), 0);
        assert_eq!(single.start(), single.goal());
    }

    #[test]
    fn set_view_intersects() {
        let r: Route = [(0, 0), (0, 1), (1, 1)]
            .into_iter()
            .map(Position::from)
            .collect();
        let rewards: BTreeSet<Position> =
            [Position::new(1, 1), Position::new(5, 5)].into_iter().collect();
        assert_eq!(r.to_set().intersection(&rewards).count(), 1);
        assert!(r.contains(Position::new(0, 1)));
    }
}
