//! Diagnostics module: Per-line checks over raw text
//!
//! Diagnostics are recomputed in full on every change. Each rule looks at one
//! physical line (the dangling-conditional rule also peeks ahead) and rules
//! are cumulative: one line can produce several diagnostics.

mod engine;
mod rules;
mod types;

pub use engine::{DiagnosticsEngine, DEFAULT_MAX_PROBLEMS, DEFAULT_SOURCE};
pub use types::{Diagnostic, Severity};

#[cfg(test)]
mod tests;
