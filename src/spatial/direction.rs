//! Fixed direction patterns for crystal growth
//!
//! Each pattern pairs the step vectors of two tracers leaving a shared right-angle
//! vertex. Patterns 0-3 step two cells along the axes, so the hypotenuse is diagonal.
//! Patterns 4-7 step one cell along the diagonals, so the hypotenuse is axis aligned.

use crate::io::error::{Result, RugError};

/// Number of direction patterns
pub const DIRECTION_COUNT: usize = 8;

/// First tracer step for each pattern
const FIRST_TRACER_STEPS: [[i32; 2]; DIRECTION_COUNT] = [
    [-2, 0],
    [-2, 0],
    [2, 0],
    [2, 0],
    [-1, -1],
    [1, 1],
    [-1, 1],
    [-1, -1],
];

/// Second tracer step for each pattern
const SECOND_TRACER_STEPS: [[i32; 2]; DIRECTION_COUNT] = [
    [0, 2],
    [0, -2],
    [0, -2],
    [0, 2],
    [1, -1],
    [1, -1],
    [1, 1],
    [-1, 1],
];

/// One of the eight right-angle orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    index: usize,
    first: [i32; 2],
    second: [i32; 2],
}

impl Direction {
    /// Look up a pattern by index
    ///
    /// # Errors
    ///
    /// Returns [`RugError::DirectionOutOfRange`] if `index >= DIRECTION_COUNT`
    pub fn from_index(index: usize) -> Result<Self> {
        match (
            FIRST_TRACER_STEPS.get(index),
            SECOND_TRACER_STEPS.get(index),
        ) {
            (Some(&first), Some(&second)) => Ok(Self {
                index,
                first,
                second,
            }),
            _ => Err(RugError::DirectionOutOfRange { index }),
        }
    }

    /// All eight patterns in index order
    pub fn all() -> impl Iterator<Item = Self> {
        FIRST_TRACER_STEPS
            .into_iter()
            .zip(SECOND_TRACER_STEPS)
            .enumerate()
            .map(|(index, (first, second))| Self {
                index,
                first,
                second,
            })
    }

    /// Pattern index in `0..DIRECTION_COUNT`
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Step vector of the first tracer
    pub const fn first_step(&self) -> [i32; 2] {
        self.first
    }

    /// Step vector of the second tracer
    pub const fn second_step(&self) -> [i32; 2] {
        self.second
    }

    /// Whether the tracers move along the diagonals (patterns 4-7)
    pub const fn is_cross(&self) -> bool {
        self.index >= 4
    }

    /// Opening step of both tracers from `anchor`
    ///
    /// A kite-center anchor sits halfway along a diagonal edge, so its first step
    /// is half a full step (truncated toward zero).
    pub const fn opening_step(&self, anchor_is_kite_center: bool) -> ([i32; 2], [i32; 2]) {
        if anchor_is_kite_center {
            (
                [self.first[0] / 2, self.first[1] / 2],
                [self.second[0] / 2, self.second[1] / 2],
            )
        } else {
            (self.first, self.second)
        }
    }
}
