//! Route planning settings, loaded from JSON and overridden from the CLI.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use mazepath_core::terrain::{BONFIRE, BOSS, FOUNTAIN};
use mazepath_core::{Position, TerrainCode};
use mazepath_paths::{CostModel, Heuristic, SymbolSet};
use serde::{Deserialize, Serialize};

use crate::render::RenderStyle;

/// Settings for one planning run. Every field has a default, so an empty
/// JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Frontier ordering estimate.
    pub heuristic: Heuristic,
    /// Cost overrides by terrain code, applied over the standard table.
    pub costs: BTreeMap<u8, u32>,
    /// Explicit start cell. When absent the unique `start_code` cell is used.
    pub start: Option<Position>,
    pub start_code: TerrainCode,
    pub goal_code: TerrainCode,
    /// Terrain counted as a reward when it lies on the route.
    pub reward_code: TerrainCode,
    pub symbols: SymbolSet,
    /// Draw the maze after the report.
    pub render: Option<RenderStyle>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Combined,
            costs: BTreeMap::new(),
            start: None,
            start_code: BONFIRE,
            goal_code: BOSS,
            reward_code: FOUNTAIN,
            symbols: SymbolSet::Arrows,
            render: None,
        }
    }
}

impl RouteConfig {
    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::Parse)
    }

    /// The standard cost table with this configuration's overrides applied.
    pub fn cost_model(&self) -> CostModel {
        self.costs
            .iter()
            .fold(CostModel::standard(), |model, (&code, &cost)| {
                model.with_cost(TerrainCode(code), cost)
            })
    }
}

/// Errors that can occur while loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Command-line value parsers
// ---------------------------------------------------------------------------

/// Parse `ROW,COL`.
pub fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row \u{201c}{row}\u{201d}: {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column \u{201c}{col}\u{201d}: {e}"))?;
    Ok(Position::new(row, col))
}

/// Parse a terrain code given as a number or a palette name.
pub fn parse_terrain(s: &str) -> Result<TerrainCode, String> {
    if let Ok(v) = s.parse::<u8>() {
        return Ok(TerrainCode(v));
    }
    TerrainCode::from_name(s).ok_or_else(|| format!("unknown terrain \u{201c}{s}\u{201d}"))
}

pub fn parse_heuristic(s: &str) -> Result<Heuristic, String> {
    match s.to_ascii_lowercase().as_str() {
        "combined" => Ok(Heuristic::Combined),
        "manhattan" => Ok(Heuristic::Manhattan),
        _ => Err(format!("unknown heuristic \u{201c}{s}\u{201d} (combined, manhattan)")),
    }
}

pub fn parse_symbols(s: &str) -> Result<SymbolSet, String> {
    match s.to_ascii_lowercase().as_str() {
        "letters" => Ok(SymbolSet::Letters),
        "arrows" => Ok(SymbolSet::Arrows),
        _ => Err(format!("unknown symbol set \u{201c}{s}\u{201d} (letters, arrows)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_core::terrain::{MONSTER, TREASURE};

    #[test]
    fn empty_object_is_default() {
        assert_eq!(RouteConfig::from_json("{}").unwrap(), RouteConfig::default());
    }

    #[test]
    fn full_config() {
        let cfg = RouteConfig::from_json(
            r#"{
                "heuristic": "manhattan",
                "costs": { "4": 3, "7": 2 },
                "start": { "row": 8, "col": 155 },
                "goal_code": 6,
                "symbols": "letters",
                "render": "ascii"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
        assert_eq!(cfg.start, Some(Position::new(8, 155)));
        assert_eq!(cfg.goal_code, TREASURE);
        assert_eq!(cfg.start_code, BONFIRE);
        assert_eq!(cfg.symbols, SymbolSet::Letters);
        assert_eq!(cfg.render, Some(RenderStyle::Ascii));

        let model = cfg.cost_model();
        assert_eq!(model.cost_of(MONSTER), Ok(3));
        assert_eq!(model.cost_of(TerrainCode(7)), Ok(2));
        assert_eq!(model.cost_of(BOSS), Ok(0));
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let err = RouteConfig::from_json(r#"{ "heuristic": "greedy" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RouteConfig::load("/nonexistent/mazepath.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn cli_parsers() {
        assert_eq!(parse_position("8,155"), Ok(Position::new(8, 155)));
        assert_eq!(parse_position(" 2 , 3 "), Ok(Position::new(2, 3)));
        assert!(parse_position("8").is_err());
        assert!(parse_position("a,1").is_err());

        assert_eq!(parse_terrain("4"), Ok(MONSTER));
        assert_eq!(parse_terrain("treasure"), Ok(TREASURE));
        assert!(parse_terrain("lava").is_err());

        assert_eq!(parse_heuristic("Manhattan"), Ok(Heuristic::Manhattan));
        assert!(parse_heuristic("dijkstra").is_err());
        assert_eq!(parse_symbols("letters"), Ok(SymbolSet::Letters));
    }
}
