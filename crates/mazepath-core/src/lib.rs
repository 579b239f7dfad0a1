//! **mazepath-core**: terrain grid model for the *mazepath* route finder.
//!
//! This crate provides the foundational types used across the workspace:
//! grid positions and cardinal directions, terrain codes, and the immutable
//! [`TerrainGrid`] with its bounds, passability and lookup queries.

pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use error::GridError;
pub use geom::{Direction, Position};
pub use grid::TerrainGrid;
pub use terrain::TerrainCode;
