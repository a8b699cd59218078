//! Driver glue around the enumeration engines
//!
//! Everything the engines need from the outside world: argument parsing,
//! defaults, error types, logging and progress display.

/// Command-line parsing and result reporting
pub mod cli;
/// Puzzle defaults, limits and reference counts
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Anchor-level progress display
pub mod progress;
