//! Crystal growth from every candidate right-angle vertex
//!
//! Every admissible triangle has exactly one right-angle vertex. For each lattice point
//! and each of the eight direction patterns, two tracers leave the point in lock-step
//! and every step on which both remain on the rug closes one triangle. Growth stops the
//! moment either tracer leaves the rug, so no deduplication is needed.

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::algorithm::trace::{CrystalRecord, TriangleRecord};
use crate::algorithm::{Enumeration, EnumerationOptions, Progress, TriangleCounter};
use crate::io::error::Result;
use crate::spatial::direction::{DIRECTION_COUNT, Direction};
use crate::spatial::grid::{Point, RugGrid, on_grid};

/// Crystal-growth triangle counter
#[derive(Debug, Clone, Copy, Default)]
pub struct Crystal;

const fn advance(position: [i32; 2], step: [i32; 2]) -> [i32; 2] {
    [position[0] + step[0], position[1] + step[1]]
}

/// Iterator over the triangles grown from one anchor in one direction
///
/// Yields `(first, second)` tracer positions, one pair per triangle.
#[derive(Debug, Clone)]
pub struct Growth {
    direction: Direction,
    first: [i32; 2],
    second: [i32; 2],
    vert: i32,
    horz: i32,
    done: bool,
}

impl Growth {
    /// Start growth from `anchor` on a `vert` by `horz` rug
    ///
    /// Kite-center anchors never grow cross patterns, so those yield nothing.
    pub const fn new(anchor: &Point, direction: Direction, vert: i32, horz: i32) -> Self {
        let (first_step, second_step) = direction.opening_step(anchor.is_kite_center);
        Self {
            direction,
            first: advance(anchor.position(), first_step),
            second: advance(anchor.position(), second_step),
            vert,
            horz,
            done: anchor.is_kite_center && direction.is_cross(),
        }
    }
}

impl Iterator for Growth {
    type Item = ([i32; 2], [i32; 2]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done
            || !on_grid(self.first, self.vert, self.horz)
            || !on_grid(self.second, self.vert, self.horz)
        {
            self.done = true;
            return None;
        }

        let tracers = (self.first, self.second);
        self.first = advance(self.first, self.direction.first_step());
        self.second = advance(self.second, self.direction.second_step());
        Some(tracers)
    }
}

/// Grow all eight patterns from the point at `index`
///
/// # Errors
///
/// Returns an error if a direction pattern cannot be resolved
pub fn grow_anchor(
    grid: &RugGrid,
    index: usize,
    options: EnumerationOptions,
) -> Result<Enumeration> {
    let mut enumeration = Enumeration::default();
    let Some(anchor) = grid.point(index) else {
        return Ok(enumeration);
    };

    for pattern in 0..DIRECTION_COUNT {
        let direction = Direction::from_index(pattern)?;
        for (first, second) in Growth::new(anchor, direction, grid.vert(), grid.horz()) {
            let record = CrystalRecord {
                anchor: *anchor,
                direction,
                first,
                second,
            };
            enumeration.tally(record.kind());
            if options.record_trace {
                enumeration.records.push(TriangleRecord::Crystal(record));
            }
        }
    }
    enumeration.candidates = enumeration.count;

    trace!(anchor = %anchor, triangles = enumeration.count, "grew anchor");
    Ok(enumeration)
}

/// Grow a single pattern by index, counting the triangles it closes
///
/// # Errors
///
/// Returns [`crate::RugError::DirectionOutOfRange`] for an index outside the table
pub fn grow_direction(grid: &RugGrid, anchor: &Point, index: usize) -> Result<u64> {
    let direction = Direction::from_index(index)?;
    Ok(Growth::new(anchor, direction, grid.vert(), grid.horz()).count() as u64)
}

impl TriangleCounter for Crystal {
    fn name(&self) -> &'static str {
        "crystal"
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
            .map(|index| {
                let grown = grow_anchor(grid, index, options);
                progress.advance();
                grown
            })
            .collect::<Result<Vec<_>>>();
        progress.finish();

        let mut enumeration = Enumeration::default();
        for grown in anchors? {
            enumeration.merge(grown);
        }

        debug!(
            one_diagonal = enumeration.one_diagonal,
            two_diagonal = enumeration.two_diagonal,
            "summed anchors"
        );
        info!(
            engine = self.name(),
            count = enumeration.count,
            "finished enumeration"
        );

        Ok(enumeration)
    }
}
