//! Per-triangle trace records
//!
//! Records exist for diagnostics and trace comparison only; they never feed back into
//! the counts. Their `Display` output is the one-line format printed in verbose mode.

use std::fmt;

use crate::spatial::direction::Direction;
use crate::spatial::grid::Point;

/// Shape of an admissible triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    /// Legs along the axes, hypotenuse on a diagonal
    OneDiagonal,
    /// Legs on the diagonals, hypotenuse along an axis
    TwoDiagonal,
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneDiagonal => write!(f, "one-diag"),
            Self::TwoDiagonal => write!(f, "two-diag"),
        }
    }
}

/// A triangle found by the brute-force scan, vertices in first-visit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForceRecord {
    /// Shape of the triangle
    pub kind: TriangleKind,
    /// Vertices as the scan first met them
    pub vertices: [Point; 3],
}

impl fmt::Display for BruteForceRecord {
    // Vertices last-visited first, flags as True/False
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1, p2, p3] = &self.vertices;
        write!(f, "{} triangle: ", self.kind)?;
        for (position, point) in [p3, p2, p1].into_iter().enumerate() {
            if position > 0 {
                write!(f, ";\t")?;
            }
            write!(f, "{point}, isKiteCenter = {}", flag_name(point.is_kite_center))?;
        }
        Ok(())
    }
}

const fn flag_name(flag: bool) -> &'static str {
    if flag { "True" } else { "False" }
}

/// A triangle traced by crystal growth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrystalRecord {
    /// Right-angle vertex
    pub anchor: Point,
    /// Pattern the tracers followed
    pub direction: Direction,
    /// First tracer position
    pub first: [i32; 2],
    /// Second tracer position
    pub second: [i32; 2],
}

impl CrystalRecord {
    /// Shape implied by the direction pattern
    pub const fn kind(&self) -> TriangleKind {
        if self.direction.is_cross() {
            TriangleKind::TwoDiagonal
        } else {
            TriangleKind::OneDiagonal
        }
    }
}

impl fmt::Display for CrystalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.anchor.is_kite_center { 'T' } else { 'F' };
        let [d1x, d1y] = self.direction.first_step();
        let [d2x, d2y] = self.direction.second_step();
        write!(
            f,
            "New triangle:\tpKC={flag}\t[{d1x},{d1y}]\t[{d2x},{d2y}]\t{}\t({},{})\t({},{})",
            self.anchor, self.first[0], self.first[1], self.second[0], self.second[1]
        )
    }
}

/// Trace record from either engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleRecord {
    /// Emitted by the brute-force scan
    BruteForce(BruteForceRecord),
    /// Emitted by crystal growth
    Crystal(CrystalRecord),
}

impl TriangleRecord {
    /// Shape of the recorded triangle
    pub const fn kind(&self) -> TriangleKind {
        match self {
            Self::BruteForce(record) => record.kind,
            Self::Crystal(record) => record.kind(),
        }
    }

    /// Vertex positions, right angle first for crystal records
    pub const fn positions(&self) -> [[i32; 2]; 3] {
        match self {
            Self::BruteForce(record) => {
                let [p1, p2, p3] = record.vertices;
                [p1.position(), p2.position(), p3.position()]
            }
            Self::Crystal(record) => [record.anchor.position(), record.first, record.second],
        }
    }
}

impl fmt::Display for TriangleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BruteForce(record) => fmt::Display::fmt(record, f),
            Self::Crystal(record) => fmt::Display::fmt(record, f),
        }
    }
}
