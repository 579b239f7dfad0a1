//! Conversion between routes and compass-direction sequences.

use mazepath_core::{Direction, Position};

use crate::{PathError, Route};

/// Glyph table used to render directions as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymbolSet {
    /// `N`, `S`, `E`, `W`.
    Letters,
    /// Emoji arrows.
    #[default]
    Arrows,
}

// Indexed by `SymbolSet`, then by position in `Direction::ALL`.
const SYMBOLS: [[&str; 4]; 2] = [
    ["N", "S", "E", "W"],
    ["\u{1f53c}", "\u{1f53d}", "\u{25b6}\u{fe0f}", "\u{25c0}\u{fe0f}"],
];

impl SymbolSet {
    /// The glyph for `dir`.
    pub fn symbol(self, dir: Direction) -> &'static str {
        let set = match self {
            SymbolSet::Letters => 0,
            SymbolSet::Arrows => 1,
        };
        let i = match dir {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        };
        SYMBOLS[set][i]
    }
}

/// One direction per consecutive pair of route positions.
///
/// Routes with fewer than two positions encode to nothing. Fails with
/// [`PathError::InvalidStep`] at the first pair that is not one cardinal
/// step apart.
pub fn encode(route: &Route) -> Result<Vec<Direction>, PathError> {
    route
        .positions()
        .windows(2)
        .enumerate()
        .map(|(index, w)| {
            w[1].checked_sub(w[0])
                .and_then(Direction::from_delta)
                .ok_or(PathError::InvalidStep {
                    index,
                    from: w[0],
                    to: w[1],
                })
        })
        .collect()
}

/// [`encode`] rendered through `symbols` and concatenated.
pub fn encode_string(route: &Route, symbols: SymbolSet) -> Result<String, PathError> {
    Ok(encode(route)?
        .into_iter()
        .map(|d| symbols.symbol(d))
        .collect())
}

/// Rebuild a route by walking `directions` from `start`.
pub fn decode(start: Position, directions: &[Direction]) -> Route {
    let mut pos = start;
    std::iter::once(start)
        .chain(directions.iter().map(|&d| {
            pos = pos.step(d);
            pos
        }))
        .collect()
}
