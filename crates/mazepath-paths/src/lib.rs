//! Weighted route search over terrain grids.
//!
//! This crate implements the route-finding engine of *mazepath*:
//!
//! - a terrain **cost model** ([`CostModel`]) mapping terrain codes to
//!   traversal costs,
//! - an **A\***-style best-first search ([`PathFinder`], [`find_path`]) that
//!   turns a grid, a cost model and two endpoints into a [`Route`],
//! - a **route encoder** ([`encode`], [`encode_string`], [`decode`]) that
//!   converts a route into compass directions and back.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge cost |
//! | [`AstarPather`] : [`WeightedPather`] | remaining-cost estimate |
//!
//! [`PathFinder`] implements all three for a [`TerrainGrid`](mazepath_core::TerrainGrid);
//! [`astar_path`] runs the search for any implementor.

mod astar;
mod cost;
mod encode;
mod error;
mod route;
mod traits;

pub use astar::{Heuristic, PathFinder, SearchStats, astar_path, find_path};
pub use cost::CostModel;
pub use encode::{SymbolSet, decode, encode, encode_string};
pub use error::{Endpoint, PathError};
pub use route::Route;
pub use traits::{AstarPather, Pather, WeightedPather};
