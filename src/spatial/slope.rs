//! Exact slope classification between two lattice points
//!
//! Only three slopes matter on the rug: flat, vertical and unit (|dy/dx| = 1).
//! Classification compares integer deltas directly and never divides.

use std::fmt;

use crate::io::error::{Result, RugError};
use crate::spatial::grid::Point;

/// Slope class of the segment joining two distinct lattice points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlopeClass {
    /// `dy == 0`
    Zero,
    /// `|dy| == |dx|`, a 45 degree segment
    Unit,
    /// `dx == 0`
    Vertical,
    /// Any other slope; such a segment is never a triangle edge
    Other,
}

impl SlopeClass {
    /// Flat or vertical
    pub const fn is_axis_aligned(self) -> bool {
        matches!(self, Self::Zero | Self::Vertical)
    }
}

impl fmt::Display for SlopeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "zero",
            Self::Unit => "unit",
            Self::Vertical => "vertical",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Classify the slope between two lattice positions
///
/// Returns `None` when the positions coincide and the slope is undefined.
pub const fn slope_between(p: [i32; 2], q: [i32; 2]) -> Option<SlopeClass> {
    let dx = q[0] - p[0];
    let dy = q[1] - p[1];

    if dx == 0 && dy == 0 {
        None
    } else if dx == 0 {
        Some(SlopeClass::Vertical)
    } else if dy == 0 {
        Some(SlopeClass::Zero)
    } else if dx.abs() == dy.abs() {
        Some(SlopeClass::Unit)
    } else {
        Some(SlopeClass::Other)
    }
}

/// Classify the slope between two distinct points
///
/// # Errors
///
/// Returns [`RugError::CoincidentPoints`] if both points share a position
pub fn classify_slope(p: &Point, q: &Point) -> Result<SlopeClass> {
    slope_between(p.position(), q.position()).ok_or(RugError::CoincidentPoints { point: *p })
}
