//! Text drawings of a maze with an optional route overlay.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crossterm::style::{Color as CtColor, Stylize};
use mazepath_core::{Position, TerrainGrid};
use serde::{Deserialize, Serialize};

use crate::palette::{self, ROUTE_ASCII, ROUTE_EMOJI, ROUTE_GLYPH};

/// Output flavour of [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One colored square emoji per cell.
    #[default]
    Emoji,
    /// One plain character per cell.
    Ascii,
    /// ANSI background colors, two columns per cell.
    Color,
}

/// Draw `grid` one line per row, marking the cells in `route`.
pub fn render(
    grid: &TerrainGrid,
    route: Option<&BTreeSet<Position>>,
    style: RenderStyle,
) -> String {
    let on_route = |p: Position| route.is_some_and(|r| r.contains(&p));
    let mut out = String::new();
    for (row, codes) in grid.rows().enumerate() {
        for (col, &code) in codes.iter().enumerate() {
            let pos = Position::new(row as i32, col as i32);
            let tile = palette::tile(code);
            match style {
                RenderStyle::Emoji if on_route(pos) => out.push_str(ROUTE_EMOJI),
                RenderStyle::Emoji => out.push_str(tile.emoji),
                RenderStyle::Ascii if on_route(pos) => out.push(ROUTE_ASCII),
                RenderStyle::Ascii => out.push(tile.ascii),
                RenderStyle::Color => {
                    let (r, g, b) = tile.rgb;
                    let bg = CtColor::Rgb { r, g, b };
                    let text = if on_route(pos) {
                        format!("{ROUTE_GLYPH} ")
                    } else {
                        "  ".to_string()
                    };
                    // Writing to a String cannot fail.
                    let _ = write!(out, "{}", text.with(CtColor::Black).on(bg));
                }
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze() -> TerrainGrid {
        TerrainGrid::parse("903\n949\n519").unwrap()
    }

    #[test]
    fn ascii_without_route() {
        assert_eq!(
            render(&maze(), None, RenderStyle::Ascii),
            ".#~\n.M.\n^B.\n"
        );
    }

    #[test]
    fn ascii_marks_route() {
        let route: BTreeSet<Position> = [(0, 0), (1, 0), (2, 0), (2, 1)]
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(
            render(&maze(), Some(&route), RenderStyle::Ascii),
            "*#~\n*M.\n**.\n"
        );
    }

    #[test]
    fn emoji_one_glyph_per_cell() {
        let g = TerrainGrid::parse("90").unwrap();
        let route: BTreeSet<Position> = [Position::new(0, 0)].into_iter().collect();
        assert_eq!(
            render(&g, Some(&route), RenderStyle::Emoji),
            format!("{ROUTE_EMOJI}\u{2b1b}\u{fe0f}\n")
        );
    }

    #[test]
    fn color_output_has_one_line_per_row() {
        let out = render(&maze(), None, RenderStyle::Color);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let g = TerrainGrid::parse("").unwrap();
        assert_eq!(render(&g, None, RenderStyle::Emoji), "");
    }

    #[test]
    fn zero_width_grid_renders_blank_lines() {
        let empty = Vec::<mazepath_core::TerrainCode>::new;
        let g = TerrainGrid::from_rows(vec![empty(), empty(), empty()]).unwrap();
        assert_eq!(render(&g, None, RenderStyle::Ascii), "\n\n\n");
    }
}
