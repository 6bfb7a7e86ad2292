//! Symbol index storage

use std::collections::HashMap;

use super::types::Occurrence;

/// Name to occurrence list mapping shared by every query.
///
/// Each list keeps insertion order. A document's occurrences are always
/// removed as a whole before its fresh occurrences are inserted, so stale and
/// fresh entries for one document never coexist.
#[derive(Debug, Default, Clone)]
pub struct SymbolIndex {
    entries: HashMap<String, Vec<Occurrence>>,
}

impl SymbolIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every occurrence contributed by `uri`.
    ///
    /// Names left without occurrences are dropped. Returns the number of
    /// occurrences removed.
    pub fn remove_document(&mut self, uri: &str) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, occurrences| {
            let before = occurrences.len();
            occurrences.retain(|occurrence| occurrence.uri != uri);
            removed += before - occurrences.len();
            !occurrences.is_empty()
        });
        removed
    }

    /// Append an occurrence to its name's list
    pub fn insert(&mut self, occurrence: Occurrence) {
        self.entries
            .entry(occurrence.name.clone())
            .or_default()
            .push(occurrence);
    }

    /// Replace everything `uri` contributed with `occurrences`
    pub fn replace_document(
        &mut self,
        uri: &str,
        occurrences: impl IntoIterator<Item = Occurrence>,
    ) {
        self.remove_document(uri);
        for occurrence in occurrences {
            self.insert(occurrence);
        }
    }

    /// All occurrences of `name`, in insertion order
    #[must_use]
    pub fn lookup(&self, name: &str) -> &[Occurrence] {
        self.entries.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether `uri` declares `name`
    #[must_use]
    pub fn is_declared_in(&self, name: &str, uri: &str) -> bool {
        self.lookup(name).iter().any(|occurrence| occurrence.uri == uri)
    }

    /// Occurrences contributed by `uri`, ordered by position
    #[must_use]
    pub fn document_occurrences(&self, uri: &str) -> Vec<&Occurrence> {
        let mut occurrences: Vec<_> = self
            .entries
            .values()
            .flatten()
            .filter(|occurrence| occurrence.uri == uri)
            .collect();
        occurrences.sort_by_key(|occurrence| (occurrence.line, occurrence.column));
        occurrences
    }

    /// Indexed names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of occurrences across all names
    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
