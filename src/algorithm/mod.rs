//! Triangle enumeration engines
//!
//! Both engines implement [`TriangleCounter`] so callers, tests and benches can run
//! them behind one interface. Each engine splits its outer loop into one unit of work
//! per anchor point, runs the units on the rayon pool and reduces them in anchor
//! order, so results never depend on the number of worker threads.

use clap::ValueEnum;
use std::fmt;

use crate::io::error::Result;
use crate::spatial::grid::RugGrid;

/// Exhaustive scan over ordered point triples
pub mod brute_force;
/// Right-angle crystal growth along fixed direction patterns
pub mod crystal;
/// Canonical triangle keys and deduplication
pub mod dedup;
/// Per-triangle trace records
pub mod trace;

pub use brute_force::BruteForce;
pub use crystal::Crystal;
pub use dedup::{TriangleKey, TriangleSet};
pub use trace::{BruteForceRecord, CrystalRecord, TriangleKind, TriangleRecord};

/// Receives one tick per finished outer-loop unit
///
/// Implementations are shared across worker threads.
pub trait Progress: Sync {
    /// Called once before any unit runs
    fn start(&self, _units: usize) {}

    /// Called after each unit completes
    fn advance(&self);

    /// Called once after every unit completed
    fn finish(&self) {}
}

/// Progress observer that ignores every tick
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&self) {}
}

/// Knobs for a single enumeration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationOptions {
    /// Collect one trace record per counted triangle
    pub record_trace: bool,
}

impl EnumerationOptions {
    /// Options that collect trace records
    pub const fn traced() -> Self {
        Self { record_trace: true }
    }
}

/// Outcome of one enumeration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Distinct admissible triangles
    pub count: u64,
    /// Admissible candidates visited before deduplication
    pub candidates: u64,
    /// Triangles with exactly one unit-slope edge
    pub one_diagonal: u64,
    /// Triangles with exactly two unit-slope edges
    pub two_diagonal: u64,
    /// Trace records in enumeration order, empty unless requested
    pub records: Vec<TriangleRecord>,
}

impl Enumeration {
    /// Tally one counted triangle
    pub const fn tally(&mut self, kind: TriangleKind) {
        self.count += 1;
        match kind {
            TriangleKind::OneDiagonal => self.one_diagonal += 1,
            TriangleKind::TwoDiagonal => self.two_diagonal += 1,
        }
    }

    /// Append the results of a later unit of work
    pub fn merge(&mut self, other: Self) {
        self.count += other.count;
        self.candidates += other.candidates;
        self.one_diagonal += other.one_diagonal;
        self.two_diagonal += other.two_diagonal;
        self.records.extend(other.records);
    }
}

/// Common capability of every triangle-counting engine
pub trait TriangleCounter {
    /// Short engine name used in logs
    fn name(&self) -> &'static str;

    /// Enumerate every admissible triangle on `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if an internal invariant is violated mid-enumeration
    fn enumerate(
        &self,
        grid: &RugGrid,
        options: EnumerationOptions,
        progress: &dyn Progress,
    ) -> Result<Enumeration>;

    /// Count triangles without tracing or progress
    ///
    /// # Errors
    ///
    /// Propagates any error from [`TriangleCounter::enumerate`]
    fn count(&self, grid: &RugGrid) -> Result<u64> {
        Ok(self
            .enumerate(grid, EnumerationOptions::default(), &NoProgress)?
            .count)
    }
}

/// Engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Algorithm {
    /// Exhaustive triple scan, the reference oracle
    BruteForce,
    /// Crystal growth from every right-angle vertex
    #[default]
    Crystal,
}

impl Algorithm {
    /// Instantiate the selected engine
    pub fn counter(self) -> Box<dyn TriangleCounter + Send + Sync> {
        match self {
            Self::BruteForce => Box::new(BruteForce),
            Self::Crystal => Box::new(Crystal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BruteForce => write!(f, "brute-force"),
            Self::Crystal => write!(f, "crystal"),
        }
    }
}
