//! Structured logging setup for the command-line tool

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};

/// Build the log filter, preferring `RUST_LOG` when it is set and valid
pub fn filter(quiet: bool) -> EnvFilter {
    let fallback = if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber writing to stderr
///
/// Results go to stdout, so logs never interleave with trace lines. A second call
/// leaves the first subscriber in place.
pub fn init(quiet: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(quiet))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
