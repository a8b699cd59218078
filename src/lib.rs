//! Counts the right-isosceles ("45 degree") triangles that can be drawn on a tessellated kite rug
//!
//! The rug is a square lattice whose points alternate between kite centers and kite edges.
//! Two independent engines count the admissible triangles: an exhaustive brute-force scan
//! over every ordered triple of lattice points, and a crystal-growth walk that traces
//! triangles outward from every right-angle vertex. Both report identical counts.

#![forbid(unsafe_code)]

/// Triangle enumeration engines and their shared counting interface
pub mod algorithm;
/// Command-line driver, configuration, logging, progress and error handling
pub mod io;
/// Lattice points, kite-center rules, slopes and growth directions
pub mod spatial;

pub use algorithm::{Algorithm, Enumeration, TriangleCounter};
pub use io::error::{Result, RugError};
pub use spatial::{KiteRule, Point, RugDimensions, RugGrid};
