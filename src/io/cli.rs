//! Command-line interface for counting triangles on a tessellated rug

use crate::algorithm::{Algorithm, BruteForce, Crystal, EnumerationOptions, TriangleCounter};
use crate::io::configuration::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::io::error::{Result, RugError, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::{KiteRule, RugDimensions, RugGrid};
use clap::Parser;
use std::io::Write;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rug")]
#[command(
    author,
    version,
    about = "Count the 45 degree triangles drawable on a tessellated kite rug"
)]
/// Command-line arguments for the rug triangle counter
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of cell columns in the rug
    #[arg(
        short = 'c',
        long = "col",
        default_value_t = DEFAULT_COLUMNS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub columns: u32,

    /// Number of cell rows in the rug
    #[arg(
        short = 'r',
        long = "row",
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub rows: u32,

    /// Kite-center placement (`0`/checkerboard: none at (1,1), `1`/diagonal: one at (1,1))
    #[arg(short = 'k', long = "kc", value_enum, default_value_t = KiteRule::Checkerboard)]
    pub rule: KiteRule,

    /// Counting engine
    #[arg(short, long, value_enum, default_value_t = Algorithm::Crystal)]
    pub algorithm: Algorithm,

    /// Print one line per triangle before the total
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output and most logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Run both engines and fail unless their counts agree (prints summaries only)
    #[arg(long, conflicts_with_all = ["verbose", "algorithm"])]
    pub verify: bool,

    /// Worker threads (default: all available cores)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject flag combinations the engines do not support
    ///
    /// # Errors
    ///
    /// Returns an error if the brute-force engine or verification is combined
    /// with a rule other than checkerboard, or if zero threads are requested
    pub fn validate(&self) -> Result<()> {
        if self.rule != KiteRule::Checkerboard
            && (self.verify || self.algorithm == Algorithm::BruteForce)
        {
            return Err(invalid_parameter(
                "kc",
                &self.rule,
                &"brute-force enumeration supports only the checkerboard rule",
            ));
        }
        if self.threads == Some(0) {
            return Err(invalid_parameter(
                "threads",
                &0,
                &"at least one worker thread is required",
            ));
        }
        Ok(())
    }

    /// Puzzle size requested on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the size exceeds the supported maximum
    pub fn dimensions(&self) -> Result<RugDimensions> {
        RugDimensions::new(self.columns, self.rows)
    }
}

/// Closing line reporting a count
pub fn summary(
    algorithm: Algorithm,
    dimensions: RugDimensions,
    rule: KiteRule,
    count: u64,
) -> String {
    match algorithm {
        Algorithm::BruteForce => format!(
            "There are {count} unique triangles for a tessellated rug with {} columns and {} rows!!!",
            dimensions.columns(),
            dimensions.rows()
        ),
        Algorithm::Crystal => {
            let ending = match rule {
                KiteRule::Checkerboard => ".",
                KiteRule::Diagonal => "",
            };
            format!(
                "Found {count} unique triangles for a tessellated rug with {} columns, {} rows, and {}{ending}",
                dimensions.columns(),
                dimensions.rows(),
                rule.corner_description()
            )
        }
    }
}

/// Runs the requested enumeration and reports the result
pub struct RugProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl RugProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the request, writing results to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if validation, pool setup, enumeration or output fails
    pub fn process(&self) -> Result<()> {
        self.cli.validate()?;
        if let Some(threads) = self.cli.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()?;
            info!(threads, "configured worker pool");
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Process the request, writing results to `out`
    ///
    /// The worker pool is left as configured by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, enumeration or output fails
    pub fn process_to<W: Write>(&self, out: &mut W) -> Result<()> {
        self.cli.validate()?;
        let grid = RugGrid::new(self.cli.dimensions()?, self.cli.rule);

        if self.cli.verify {
            return self.verify(&grid, out);
        }

        let options = EnumerationOptions {
            record_trace: self.cli.verbose,
        };
        let counter = self.cli.algorithm.counter();
        self.progress_manager.set_label(counter.name());

        let start_time = Instant::now();
        let enumeration = counter.enumerate(&grid, options, &self.progress_manager)?;
        info!(
            engine = counter.name(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "enumeration complete"
        );

        for record in &enumeration.records {
            writeln!(out, "{record}")?;
        }
        writeln!(
            out,
            "{}",
            summary(
                self.cli.algorithm,
                grid.dimensions(),
                grid.rule(),
                enumeration.count
            )
        )?;

        Ok(())
    }

    fn verify<W: Write>(&self, grid: &RugGrid, out: &mut W) -> Result<()> {
        let options = EnumerationOptions::default();

        self.progress_manager.set_label(BruteForce.name());
        let brute_force = BruteForce
            .enumerate(grid, options, &self.progress_manager)?
            .count;
        self.progress_manager.set_label(Crystal.name());
        let crystal = Crystal
            .enumerate(grid, options, &self.progress_manager)?
            .count;

        if brute_force != crystal {
            return Err(RugError::CountMismatch {
                brute_force,
                crystal,
            });
        }

        for algorithm in [Algorithm::BruteForce, Algorithm::Crystal] {
            writeln!(
                out,
                "{}",
                summary(algorithm, grid.dimensions(), grid.rule(), crystal)
            )?;
        }
        writeln!(out, "Both engines agree.")?;

        Ok(())
    }
}
