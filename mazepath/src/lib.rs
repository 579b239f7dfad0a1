//! mazepath: cheapest-route planner for terrain mazes.
//!
//! The binary glues the grid model and route search together: it loads a
//! text grid, resolves the start and goal markers, runs the search and
//! reports the route as compass directions, optionally drawing the maze.

pub mod config;
pub mod palette;
pub mod plan;
pub mod render;

pub use config::{ConfigError, RouteConfig};
pub use plan::{Plan, PlanError};
pub use render::RenderStyle;
