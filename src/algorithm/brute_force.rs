//! Exhaustive scan over every ordered triple of lattice points
//!
//! Cubic in the number of lattice points. Every triple is classified by its three
//! pairwise slopes and the kite-center flags of its vertices; admissible triples are
//! deduplicated by their canonical key. This is the oracle the crystal engine is
//! validated against.

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::algorithm::dedup::{TriangleKey, TriangleSet};
use crate::algorithm::trace::{BruteForceRecord, TriangleKind, TriangleRecord};
use crate::algorithm::{Enumeration, EnumerationOptions, Progress, TriangleCounter};
use crate::io::error::Result;
use crate::spatial::grid::{Point, RugGrid};
use crate::spatial::slope::{SlopeClass, classify_slope};

/// Brute-force triangle counter
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

/// An admissible ordered triple, before deduplication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Canonical identity of the triangle
    pub key: TriangleKey,
    /// Vertices in scan order with their shape
    pub record: BruteForceRecord,
}

/// Decide whether three distinct points form an admissible triangle
///
/// One-diagonal triangles need exactly one unit-slope edge, one flat and one
/// vertical edge, and at most one kite-center vertex. Two-diagonal triangles need
/// exactly two unit-slope edges, an axis-aligned third edge, and no kite centers.
///
/// # Errors
///
/// Returns an error if any two of the points coincide
pub fn classify_triple(p1: &Point, p2: &Point, p3: &Point) -> Result<Option<TriangleKind>> {
    let slopes = [
        classify_slope(p1, p2)?,
        classify_slope(p1, p3)?,
        classify_slope(p2, p3)?,
    ];
    let kite_centers = [p1, p2, p3]
        .iter()
        .filter(|p| p.is_kite_center)
        .count();
    let count_of = |class: SlopeClass| slopes.iter().filter(|&&s| s == class).count();

    let kind = match count_of(SlopeClass::Unit) {
        1 if kite_centers < 2
            && count_of(SlopeClass::Zero) == 1
            && count_of(SlopeClass::Vertical) == 1 =>
        {
            Some(TriangleKind::OneDiagonal)
        }
        2 if kite_centers == 0
            && slopes
                .iter()
                .any(|s| *s != SlopeClass::Unit && s.is_axis_aligned()) =>
        {
            Some(TriangleKind::TwoDiagonal)
        }
        _ => None,
    };

    Ok(kind)
}

/// Scan every ordered triple whose first vertex is the point at `first`
///
/// Candidates are returned in scan order. Out-of-range indices yield nothing.
///
/// # Errors
///
/// Returns an error if slope classification fails
pub fn scan_anchor(grid: &RugGrid, first: usize) -> Result<Vec<Candidate>> {
    let Some(p1) = grid.point(first) else {
        return Ok(Vec::new());
    };

    let mut candidates = Vec::new();
    for (second, p2) in grid.iter().enumerate() {
        if second == first {
            continue;
        }
        for (third, p3) in grid.iter().enumerate() {
            if third == first || third == second {
                continue;
            }
            if let Some(kind) = classify_triple(p1, p2, p3)? {
                candidates.push(Candidate {
                    key: TriangleKey::new(first, second, third),
                    record: BruteForceRecord {
                        kind,
                        vertices: [*p1, *p2, *p3],
                    },
                });
            }
        }
    }

    trace!(anchor = %p1, candidates = candidates.len(), "scanned anchor");
    Ok(candidates)
}

/// Fold per-anchor candidates into a deduplicated enumeration
///
/// Anchors must be supplied in scan order so the surviving record for each triangle
/// is the one a sequential scan would have met first.
pub fn reduce_candidates<I>(anchors: I, options: EnumerationOptions) -> (Enumeration, TriangleSet)
where
    I: IntoIterator<Item = Vec<Candidate>>,
{
    let mut enumeration = Enumeration::default();
    let mut seen = TriangleSet::new();

    for candidate in anchors.into_iter().flatten() {
        if seen.insert(candidate.key) {
            enumeration.tally(candidate.record.kind);
            if options.record_trace {
                enumeration
                    .records
                    .push(TriangleRecord::BruteForce(candidate.record));
            }
        }
    }
    enumeration.candidates = seen.candidates();

    (enumeration, seen)
}

impl TriangleCounter for BruteForce {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn enumerate(
        &self,
        grid: &RugGrid,
        options: EnumerationOptions,
        progress: &dyn Progress,
    ) -> Result<Enumeration> {
        let dimensions = grid.dimensions();
        info!(
            engine = self.name(),
            columns = dimensions.columns(),
            rows = dimensions.rows(),
            rule = %grid.rule(),
            points = grid.len(),
            kite_centers = grid.kite_center_count(),
            "starting enumeration"
        );

        progress.start(grid.len());
        let anchors = (0..grid.len())
            .into_par_iter()
            .map(|first| {
                let candidates = scan_anchor(grid, first);
                progress.advance();
                candidates
            })
            .collect::<Result<Vec<_>>>();
        progress.finish();

        let (enumeration, seen) = reduce_candidates(anchors?, options);

        debug!(
            one_diagonal = enumeration.one_diagonal,
            two_diagonal = enumeration.two_diagonal,
            repeats = seen.stats.repeats,
            "deduplicated candidates"
        );
        info!(
            engine = self.name(),
            count = enumeration.count,
            "finished enumeration"
        );

        Ok(enumeration)
    }
}
