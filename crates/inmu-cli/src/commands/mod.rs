//! CLI commands

pub mod check;
pub mod format;
pub mod load;
pub mod query;
pub mod symbols;

pub use crate::types::QueryCommands;
