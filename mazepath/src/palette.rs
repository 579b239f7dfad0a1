//! How each terrain kind is drawn.
//!
//! The RGB values are the colors of the maze bitmaps the grids are traced
//! from, so colored output looks like the source image.

use mazepath_core::TerrainCode;
use mazepath_core::terrain::{
    BONFIRE, BOSS, FOUNTAIN, LANDMARK, MONSTER, PASSAGE, TREASURE, WALL,
};

/// Drawing attributes of one terrain kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub emoji: &'static str,
    pub ascii: char,
    pub rgb: (u8, u8, u8),
}

const UNKNOWN: Tile = Tile {
    emoji: "?",
    ascii: '?',
    rgb: (128, 128, 128),
};

/// Route marker in emoji output.
pub const ROUTE_EMOJI: &str = "\u{2b50}";
/// Route marker in ASCII output.
pub const ROUTE_ASCII: char = '*';
/// Route marker drawn over the terrain color in colored output.
pub const ROUTE_GLYPH: char = '\u{2605}';

/// The drawing attributes of `code`; unnamed codes get a `?` tile.
pub fn tile(code: TerrainCode) -> Tile {
    let (emoji, ascii, rgb) = match code {
        PASSAGE => ("\u{2b1c}\u{fe0f}", '.', (255, 255, 255)),
        WALL => ("\u{2b1b}\u{fe0f}", '#', (0, 0, 0)),
        BOSS => ("\u{1f7e5}", 'B', (255, 0, 0)),
        LANDMARK => ("\u{1f7e6}", 'L', (55, 59, 255)),
        FOUNTAIN => ("\u{1f7e9}", '~', (57, 156, 42)),
        MONSTER => ("\u{1f7ea}", 'M', (137, 121, 216)),
        BONFIRE => ("\u{1f7e7}", '^', (255, 162, 0)),
        TREASURE => ("\u{1f7e8}", '$', (7, 237, 130)),
        _ => return UNKNOWN,
    };
    Tile { emoji, ascii, rgb }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_core::terrain::NAMED;

    #[test]
    fn named_codes_have_distinct_ascii() {
        let mut seen: Vec<char> = NAMED.iter().map(|&c| tile(c).ascii).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), NAMED.len());
        assert!(!seen.contains(&ROUTE_ASCII));
        assert!(!seen.contains(&'?'));
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(tile(TerrainCode(7)), UNKNOWN);
        assert_eq!(tile(WALL).rgb, (0, 0, 0));
    }
}
