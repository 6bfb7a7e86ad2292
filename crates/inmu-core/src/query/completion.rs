//! Completion proposals

use std::collections::HashSet;

use crate::documents::DocumentStore;
use crate::index::SymbolIndex;
use crate::syntax::keywords::KEYWORDS;

use super::types::{CompletionItem, CompletionKind};

/// Reserved names first, then the names declared in `uri`.
///
/// Declared names appear once each, in declaration order, with the kind of
/// their first declaration. Names that shadow a reserved word are skipped.
#[must_use]
pub fn completion(index: &SymbolIndex, documents: &DocumentStore, uri: &str) -> Vec<CompletionItem> {
    if !documents.contains(uri) {
        return Vec::new();
    }

    let mut items: Vec<CompletionItem> = KEYWORDS
        .iter()
        .map(|keyword| CompletionItem {
            label: keyword.name.to_string(),
            kind: CompletionKind::from(keyword.category),
            detail: Some(keyword.detail.to_string()),
            documentation: Some(keyword.hover.to_string()),
            insert_text: keyword.insert_text(),
        })
        .collect();

    let mut seen: HashSet<&str> = KEYWORDS.iter().map(|keyword| keyword.name).collect();
    for occurrence in index.document_occurrences(uri) {
        if !seen.insert(occurrence.name.as_str()) {
            continue;
        }
        items.push(CompletionItem {
            label: occurrence.name.clone(),
            kind: CompletionKind::from(occurrence.kind),
            detail: Some(occurrence.kind.to_string()),
            documentation: occurrence.doc_comment.clone(),
            insert_text: None,
        });
    }

    items
}
