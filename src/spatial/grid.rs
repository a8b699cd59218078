//! Rug lattice construction and kite-center classification
//!
//! A rug of `columns` by `rows` unit cells is drawn with `columns + 1` vertical and
//! `rows + 1` horizontal lines. Every crossing is a lattice point at integer coordinates
//! `(x, y)` with `1 <= x <= vert` and `1 <= y <= horz`, and each point is either the
//! center of a kite tile or lies on a kite edge. Points are stored in an `Array2`
//! indexed by `[x - 1, y - 1]`, so logical iteration order is `x` outer, `y` inner.

use clap::ValueEnum;
use ndarray::Array2;
use std::fmt;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Placement rule deciding which lattice points are kite centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum KiteRule {
    /// Kite centers checker the rug; `(1, 1)` is a kite edge
    #[default]
    #[value(alias = "0")]
    Checkerboard,
    /// Kite centers sit where `|x - y|` is even; `(1, 1)` is a kite center
    #[value(alias = "1")]
    Diagonal,
}

impl KiteRule {
    /// Classify the lattice point `(x, y)`
    pub const fn is_kite_center(self, x: i32, y: i32) -> bool {
        match self {
            Self::Checkerboard => (x - 1).rem_euclid(2) != (y - 1).rem_euclid(2),
            Self::Diagonal => (x - y).rem_euclid(2) == 0,
        }
    }

    /// Human readable placement of the corner point, used in summaries
    pub const fn corner_description(self) -> &'static str {
        match self {
            Self::Checkerboard => "no kite center at (1,1)",
            Self::Diagonal => "a kite center at (1,1)",
        }
    }
}

impl fmt::Display for KiteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkerboard => write!(f, "checkerboard"),
            Self::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// A classified lattice point
///
/// The derived ordering (x, then y, then flag) is the total order used for
/// canonical triangle keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column coordinate, 1-based
    pub x: i32,
    /// Row coordinate, 1-based
    pub y: i32,
    /// Whether the point is the center of a kite tile
    pub is_kite_center: bool,
}

impl Point {
    /// Create a point with an explicit classification
    pub const fn new(x: i32, y: i32, is_kite_center: bool) -> Self {
        Self {
            x,
            y,
            is_kite_center,
        }
    }

    /// Create a point classified by `rule`
    pub const fn classified(x: i32, y: i32, rule: KiteRule) -> Self {
        Self::new(x, y, rule.is_kite_center(x, y))
    }

    /// Bare lattice coordinates
    pub const fn position(&self) -> [i32; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Puzzle size in unit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RugDimensions {
    columns: u32,
    rows: u32,
}

impl RugDimensions {
    /// Validate a puzzle size
    ///
    /// Zero-sized rugs are accepted and simply contain no triangles.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds `MAX_GRID_DIMENSION`
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        if columns > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "columns",
                &columns,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if rows > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "rows",
                &rows,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(Self { columns, rows })
    }

    /// Number of cell columns
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of cell rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of vertical grid lines
    pub const fn vert(&self) -> i32 {
        self.columns as i32 + 1
    }

    /// Number of horizontal grid lines
    pub const fn horz(&self) -> i32 {
        self.rows as i32 + 1
    }

    /// Same rug turned on its side
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self {
            columns: self.rows,
            rows: self.columns,
        }
    }
}

/// Check whether a position lies on a `vert` by `horz` lattice
pub const fn on_grid(position: [i32; 2], vert: i32, horz: i32) -> bool {
    position[0] >= 1 && position[0] <= vert && position[1] >= 1 && position[1] <= horz
}

/// The full set of classified lattice points for one rug
#[derive(Debug, Clone)]
pub struct RugGrid {
    dimensions: RugDimensions,
    rule: KiteRule,
    points: Array2<Point>,
}

impl RugGrid {
    /// Build and classify every lattice point of the rug
    pub fn new(dimensions: RugDimensions, rule: KiteRule) -> Self {
        let shape = (dimensions.vert() as usize, dimensions.horz() as usize);
        let points = Array2::from_shape_fn(shape, |(i, j)| {
            Point::classified(i as i32 + 1, j as i32 + 1, rule)
        });

        Self {
            dimensions,
            rule,
            points,
        }
    }

    /// Validate the size and build the rug in one step
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are rejected by [`RugDimensions::new`]
    pub fn build(columns: u32, rows: u32, rule: KiteRule) -> Result<Self> {
        Ok(Self::new(RugDimensions::new(columns, rows)?, rule))
    }

    /// Puzzle size
    pub const fn dimensions(&self) -> RugDimensions {
        self.dimensions
    }

    /// Kite-center placement rule
    pub const fn rule(&self) -> KiteRule {
        self.rule
    }

    /// Number of vertical grid lines
    pub const fn vert(&self) -> i32 {
        self.dimensions.vert()
    }

    /// Number of horizontal grid lines
    pub const fn horz(&self) -> i32 {
        self.dimensions.horz()
    }

    /// Total number of lattice points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: even a zero-sized rug has its corner point
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `position` lies on this rug
    pub const fn contains(&self, position: [i32; 2]) -> bool {
        on_grid(position, self.vert(), self.horz())
    }

    /// Look up the point at a position, `None` when off the rug
    pub fn get(&self, position: [i32; 2]) -> Option<&Point> {
        if !self.contains(position) {
            return None;
        }
        self.points
            .get(((position[0] - 1) as usize, (position[1] - 1) as usize))
    }

    /// Point at a logical index in enumeration order
    pub fn point(&self, index: usize) -> Option<&Point> {
        let horz = self.points.ncols();
        if horz == 0 {
            return None;
        }
        self.points.get((index / horz, index % horz))
    }

    /// All points, `x` outer and `y` inner
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Number of kite-center points
    pub fn kite_center_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_kite_center).count()
    }
}
