//! Terrain codes and the named kinds of the standard palette.

use std::fmt;

/// A terrain classification tag for one grid cell.
///
/// Exactly one code, [`WALL`], is impassable; every other value is some kind
/// of traversable terrain whose movement cost is decided by a cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TerrainCode(pub u8);

pub const WALL: TerrainCode = TerrainCode(0);
pub const BOSS: TerrainCode = TerrainCode(1);
pub const LANDMARK: TerrainCode = TerrainCode(2);
pub const FOUNTAIN: TerrainCode = TerrainCode(3);
pub const MONSTER: TerrainCode = TerrainCode(4);
pub const BONFIRE: TerrainCode = TerrainCode(5);
pub const TREASURE: TerrainCode = TerrainCode(6);
pub const PASSAGE: TerrainCode = TerrainCode(9);

/// Every named code of the standard palette.
pub const NAMED: [TerrainCode; 8] = [
    WALL, BOSS, LANDMARK, FOUNTAIN, MONSTER, BONFIRE, TREASURE, PASSAGE,
];

impl TerrainCode {
    /// Whether this is the wall code.
    pub const fn is_wall(self) -> bool {
        self.0 == WALL.0
    }

    /// Human readable name for the standard palette, if the code is named.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            WALL => "wall",
            BOSS => "boss",
            LANDMARK => "landmark",
            FOUNTAIN => "fountain",
            MONSTER => "monster",
            BONFIRE => "bonfire",
            TREASURE => "treasure",
            PASSAGE => "passage",
            _ => return None,
        };
        Some(name)
    }

    /// Look up a named code by its palette name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED
            .into_iter()
            .find(|c| c.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }
}

impl From<u8> for TerrainCode {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl From<TerrainCode> for u8 {
    fn from(c: TerrainCode) -> Self {
        c.0
    }
}

impl fmt::Display for TerrainCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({name})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
