//! Lattice geometry for the tessellated rug
//!
//! This module contains the spatial building blocks shared by both engines:
//! - Grid construction and kite-center classification
//! - Exact slope classification between two lattice points
//! - The fixed direction patterns used by crystal growth

/// Crystal growth direction patterns
pub mod direction;
/// Lattice points, kite-center rules and the rug grid
pub mod grid;
/// Integer slope classification between lattice points
pub mod slope;

pub use direction::{DIRECTION_COUNT, Direction};
pub use grid::{KiteRule, Point, RugDimensions, RugGrid, on_grid};
pub use slope::{SlopeClass, classify_slope};
