//! Hover text

use crate::documents::DocumentStore;
use crate::index::{Occurrence, SymbolIndex};
use crate::syntax::{keywords, Position};

use super::navigation::word_at_position;
use super::types::Hover;

/// Markdown for the word under the cursor.
///
/// Reserved names get their fixed description. Declared names prefer a
/// declaration from the requesting document over the first one indexed.
#[must_use]
pub fn hover(
    index: &SymbolIndex,
    documents: &DocumentStore,
    uri: &str,
    position: Position,
) -> Option<Hover> {
    let target = word_at_position(documents, uri, position)?;

    if let Some(keyword) = keywords::lookup(target.word) {
        return Some(Hover {
            contents: keyword.hover.to_string(),
            range: Some(target.range),
        });
    }

    let occurrences = index.lookup(target.word);
    let occurrence = occurrences
        .iter()
        .find(|occurrence| occurrence.uri == uri)
        .or_else(|| occurrences.first())?;

    Some(Hover {
        contents: render(occurrence),
        range: Some(target.range),
    })
}

fn render(occurrence: &Occurrence) -> String {
    let body = match &occurrence.doc_comment {
        Some(doc) => doc.clone(),
        None => format!("Defined at line {}", occurrence.line + 1),
    };
    format!("**({}) {}**\n\n{body}", occurrence.kind, occurrence.name)
}
