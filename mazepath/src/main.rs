//! mazepath: print the cheapest route from the bonfire to the boss.

use std::path::PathBuf;

use clap::Parser;
use mazepath_core::{Position, TerrainCode, TerrainGrid};
use mazepath_lib::config::{self, RouteConfig};
use mazepath_lib::render::{self, RenderStyle};
use mazepath_lib::plan;
use mazepath_paths::{Heuristic, SymbolSet};

/// Find the cheapest route through a terrain maze.
#[derive(Parser, Debug)]
#[command(name = "mazepath")]
#[command(about = "Cheapest-route planner for terrain mazes", long_about = None)]
struct Args {
    /// Grid file: one line per row, one terrain digit per cell
    grid: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start cell as ROW,COL (default: the unique start-terrain cell)
    #[arg(short, long, value_parser = config::parse_position)]
    start: Option<Position>,

    /// Terrain marking the start (number or name)
    #[arg(long, value_parser = config::parse_terrain)]
    start_code: Option<TerrainCode>,

    /// Terrain marking the goal (number or name)
    #[arg(long, value_parser = config::parse_terrain)]
    goal_code: Option<TerrainCode>,

    /// Terrain counted as a reward along the route (number or name)
    #[arg(long, value_parser = config::parse_terrain)]
    reward_code: Option<TerrainCode>,

    /// Frontier estimate: combined or manhattan
    #[arg(long, value_parser = config::parse_heuristic)]
    heuristic: Option<Heuristic>,

    /// Direction symbols: letters or arrows
    #[arg(long, value_parser = config::parse_symbols)]
    symbols: Option<SymbolSet>,

    /// Draw the maze with the route marked
    #[arg(short, long, value_enum)]
    render: Option<RenderStyle>,

    /// Write the drawing to this file instead of stdout
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Apply command-line overrides on top of `cfg`.
    fn apply(&self, cfg: &mut RouteConfig) {
        if self.start.is_some() {
            cfg.start = self.start;
        }
        if let Some(code) = self.start_code {
            cfg.start_code = code;
        }
        if let Some(code) = self.goal_code {
            cfg.goal_code = code;
        }
        if let Some(code) = self.reward_code {
            cfg.reward_code = code;
        }
        if let Some(h) = self.heuristic {
            cfg.heuristic = h;
        }
        if let Some(s) = self.symbols {
            cfg.symbols = s;
        }
        if self.render.is_some() {
            cfg.render = self.render;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut cfg = match &args.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            RouteConfig::load(path)?
        }
        None => RouteConfig::default(),
    };
    args.apply(&mut cfg);

    let text = std::fs::read_to_string(&args.grid)
        .map_err(|e| format!("cannot read grid {}: {e}", args.grid.display()))?;
    let grid = TerrainGrid::parse(&text)?;
    log::info!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        args.grid.display()
    );

    let plan = plan::plan(&grid, &cfg)?;

    println!("Total Steps: {}", plan.total_steps());
    println!("Heals on Route: {}", plan.rewards.len());
    if plan.route.is_empty() {
        println!("No route found");
    } else {
        println!("Route Cost: {}", plan.cost);
        println!("{}", plan.directions);
    }

    let style = cfg.render.or(args.export.as_ref().map(|_| RenderStyle::default()));
    if let Some(style) = style {
        let cells = plan.route.to_set();
        let drawing = render::render(&grid, Some(&cells), style);
        match &args.export {
            Some(path) => {
                std::fs::write(path, drawing)
                    .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
                log::info!("wrote {style:?} drawing to {}", path.display());
            }
            None => print!("{drawing}"),
        }
    }

    Ok(())
}
