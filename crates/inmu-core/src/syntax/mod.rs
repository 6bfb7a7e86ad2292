//! Syntax module: Shallow, line-oriented recognition
//!
//! Everything that looks at raw source lines lives here: text positions,
//! word scanning, the keyword table, the line classifier and the
//! documentation comment collector.

mod classifier;
mod comment;
pub mod keywords;
mod text;

pub use classifier::{
    LineClassifier, LineKind, PatternClassifier, BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN,
    LINE_COMMENT_MARKERS,
};
pub use comment::{CommentBlock, CommentCollector};
pub use keywords::{Keyword, KeywordCategory};
pub use text::{
    byte_offset, identifiers, split_lines, string_literal_spans, utf16_column, utf16_len,
    whole_word_matches, word_at, word_runs, Position, TextRange,
};

#[cfg(test)]
mod tests;
