//! Format module: Brace-depth re-indentation
//!
//! Formatting never fails and always produces a single edit replacing the
//! whole document.

mod formatter;

pub use formatter::{format_document, FormattingOptions, TextEdit, DEFAULT_TAB_SIZE};

#[cfg(test)]
mod tests;
