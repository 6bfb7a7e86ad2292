//! Tests for logging setup
//!
//! The global subscriber can only be installed once per process, so these
//! tests check the filter selection and build subscribers locally.

use tracing_subscriber::{fmt, prelude::*};

use crate::log_filter;

#[test]
fn test_default_filter_is_info() {
    let debug_str = format!("{:?}", log_filter(false));
    assert!(debug_str.contains("INFO") || debug_str.contains("info"));
}

#[test]
fn test_verbose_filter_is_debug() {
    let debug_str = format!("{:?}", log_filter(true));
    assert!(debug_str.contains("DEBUG") || debug_str.contains("debug"));
}

#[test]
fn test_subscriber_builds_without_installing() {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(true));

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("scoped subscriber active");
    });
}
