//! Word resolution, definition and references

use crate::documents::DocumentStore;
use crate::index::SymbolIndex;
use crate::syntax::{split_lines, whole_word_matches, word_at, Position, TextRange};

use super::types::Location;

/// The word under a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordAt<'a> {
    pub word: &'a str,
    pub range: TextRange,
}

/// Resolve the word touching `position` in the open document `uri`.
///
/// A column past the end of the line is clamped to the line end.
#[must_use]
pub fn word_at_position<'a>(
    documents: &'a DocumentStore,
    uri: &str,
    position: Position,
) -> Option<WordAt<'a>> {
    let line = documents.line(uri, position.line)?;
    let (offset, word) = word_at(line, position.column)?;
    Some(WordAt {
        word,
        range: TextRange::of_bytes(position.line, line, offset, word.len()),
    })
}

/// Every declaration of the word under the cursor, across all documents
#[must_use]
pub fn definition(
    index: &SymbolIndex,
    documents: &DocumentStore,
    uri: &str,
    position: Position,
) -> Vec<Location> {
    let Some(target) = word_at_position(documents, uri, position) else {
        return Vec::new();
    };

    index.lookup(target.word).iter().map(Location::from).collect()
}

/// Every whole-word use of the word under the cursor in every open document.
///
/// Works on raw text, so undeclared uses and mentions inside comments or
/// strings are included.
#[must_use]
pub fn references(documents: &DocumentStore, uri: &str, position: Position) -> Vec<Location> {
    let Some(target) = word_at_position(documents, uri, position) else {
        return Vec::new();
    };

    let mut locations = Vec::new();
    for (doc_uri, text) in documents.iter() {
        for (line_no, line) in split_lines(text).into_iter().enumerate() {
            locations.extend(whole_word_matches(line, target.word).map(|offset| {
                Location::new(
                    doc_uri,
                    TextRange::of_bytes(line_no as u32, line, offset, target.word.len()),
                )
            }));
        }
    }

    tracing::debug!("{} references to '{}'", locations.len(), target.word);
    locations
}
