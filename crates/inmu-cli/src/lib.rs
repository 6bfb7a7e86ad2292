//! inmu-cli library
//!
//! This module exposes the internal functionality of inmu-cli for testing purposes.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub mod types;
pub use types::QueryCommands;

/// Log filter for the given verbosity
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber; logs go to stderr so stdout stays parseable
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose))
        .init();
}

#[cfg(test)]
mod tests;
