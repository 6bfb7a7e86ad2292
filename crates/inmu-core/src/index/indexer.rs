//! Per-document symbol indexing

use crate::syntax::{
    split_lines, utf16_column, CommentCollector, LineClassifier, LineKind, PatternClassifier,
};

use super::store::SymbolIndex;
use super::types::Occurrence;

/// Scans documents for declarations and keeps the [`SymbolIndex`] current
#[derive(Debug, Clone, Default)]
pub struct SymbolIndexer<C = PatternClassifier> {
    classifier: C,
}

impl SymbolIndexer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: LineClassifier> SymbolIndexer<C> {
    /// Use a custom line classifier
    #[must_use]
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Scan one document and return its declarations in line order
    #[must_use]
    pub fn scan(&self, uri: &str, text: &str) -> Vec<Occurrence> {
        let lines = split_lines(text);
        let mut comments = CommentCollector::new();
        let mut occurrences = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            match self.classifier.classify(line) {
                LineKind::BlockCommentStart => {
                    i = comments.collect(&lines, i);
                }
                LineKind::Declaration { name, kind } => {
                    // First textual occurrence, even if it sits inside another token
                    let column = line.find(name).map_or(0, |offset| utf16_column(line, offset));
                    tracing::trace!("{} '{}' at {}:{}", kind, name, i + 1, column);
                    occurrences.push(
                        Occurrence::new(name, kind, uri, i as u32, column)
                            .with_doc_comment(comments.take()),
                    );
                }
                LineKind::Statement => comments.clear(),
                LineKind::Blank | LineKind::LineComment => {}
            }
            i += 1;
        }

        occurrences
    }

    /// Replace `uri`'s occurrences in `index` with a fresh scan of `text`.
    ///
    /// Returns the number of occurrences now recorded for `uri`.
    pub fn reindex(&self, index: &mut SymbolIndex, uri: &str, text: &str) -> usize {
        let removed = index.remove_document(uri);
        let occurrences = self.scan(uri, text);
        let count = occurrences.len();
        for occurrence in occurrences {
            index.insert(occurrence);
        }
        tracing::debug!(
            "Reindexed {}: {} stale occurrences removed, {} recorded",
            uri,
            removed,
            count
        );
        count
    }
}
