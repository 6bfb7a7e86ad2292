//! Scanner module: Source file discovery
//!
//! Walks directories, respecting .gitignore, and selects INMU source files.

mod walker;

pub use walker::{path_to_uri, DiscoveredFile, Scanner, SOURCE_EXTENSION};
