//! Error types for rug enumeration

use std::fmt;

use crate::spatial::grid::Point;

/// Main error type for all rug operations
#[derive(Debug)]
pub enum RugError {
    /// Caller-supplied parameter rejected before any enumeration
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Slope requested between a point and itself
    CoincidentPoints {
        /// The repeated point
        point: Point,
    },

    /// Crystal direction pattern index outside the fixed table
    DirectionOutOfRange {
        /// The invalid index
        index: usize,
    },

    /// Worker pool could not be configured
    ThreadPool {
        /// Description of the failure
        reason: String,
    },

    /// Writing results failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The two engines disagreed on the same rug
    CountMismatch {
        /// Brute-force count
        brute_force: u64,
        /// Crystal-growth count
        crystal: u64,
    },
}

impl fmt::Display for RugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CoincidentPoints { point } => {
                write!(f, "Slope is undefined between {point} and itself")
            }
            Self::DirectionOutOfRange { index } => {
                write!(
                    f,
                    "Direction index {index} is out of bounds (max: {})",
                    crate::spatial::DIRECTION_COUNT - 1
                )
            }
            Self::ThreadPool { reason } => {
                write!(f, "Failed to configure worker pool: {reason}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write results: {source}")
            }
            Self::CountMismatch {
                brute_force,
                crystal,
            } => {
                write!(
                    f,
                    "Engines disagree: brute force found {brute_force} triangles, crystal growth found {crystal}"
                )
            }
        }
    }
}

impl std::error::Error for RugError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rug results
pub type Result<T> = std::result::Result<T, RugError>;

impl From<std::io::Error> for RugError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

impl From<rayon::ThreadPoolBuildError> for RugError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RugError {
    RugError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
