//! Puzzle defaults, limits and reference results

// The worked example shown at 1:26 of the puzzle video
/// Default number of cell columns
pub const DEFAULT_COLUMNS: u32 = 5;
/// Default number of cell rows
pub const DEFAULT_ROWS: u32 = 2;

// Keeps every lattice coordinate and step comfortably inside i32
/// Maximum allowed columns or rows
pub const MAX_GRID_DIMENSION: u32 = 4096;

// Progress bar display settings
/// Width of the anchor progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Grids with fewer lattice points finish too fast to warrant a progress bar
pub const MIN_POINTS_FOR_PROGRESS: usize = 64;

// Logging
/// Filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "rug_triangles=warn";
/// Filter applied when `RUST_LOG` is unset and output is quiet
pub const QUIET_LOG_FILTER: &str = "rug_triangles=error";

// Reference counts for the checkerboard rule
/// Triangles on the worked example (5 columns, 2 rows)
pub const WORKED_EXAMPLE_COUNT: u64 = 43;
/// Main puzzle size in columns
pub const MAIN_PUZZLE_COLUMNS: u32 = 20;
/// Main puzzle size in rows
pub const MAIN_PUZZLE_ROWS: u32 = 18;
/// Triangles on the main puzzle (20 columns, 18 rows)
pub const MAIN_PUZZLE_COUNT: u64 = 7860;
