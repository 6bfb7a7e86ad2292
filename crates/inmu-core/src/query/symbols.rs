//! Document outline

use crate::index::SymbolIndex;

use super::types::SymbolDescriptor;

/// Declarations made by `uri`, ordered by position
#[must_use]
pub fn document_symbols(index: &SymbolIndex, uri: &str) -> Vec<SymbolDescriptor> {
    index
        .document_occurrences(uri)
        .into_iter()
        .map(SymbolDescriptor::from)
        .collect()
}
