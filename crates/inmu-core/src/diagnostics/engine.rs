//! Diagnostics engine

use crate::index::SymbolIndex;
use crate::syntax::{split_lines, LineClassifier, PatternClassifier};

use super::rules;
use super::types::Diagnostic;

/// Default source tag attached to every diagnostic
pub const DEFAULT_SOURCE: &str = "inmu";
/// Default cap on diagnostics reported per document
pub const DEFAULT_MAX_PROBLEMS: usize = 1000;

/// Derives diagnostics from document text and the current symbol index
#[derive(Debug, Clone)]
pub struct DiagnosticsEngine<C = PatternClassifier> {
    classifier: C,
    source: String,
    max_problems: usize,
}

impl<C: Default> Default for DiagnosticsEngine<C> {
    fn default() -> Self {
        Self {
            classifier: C::default(),
            source: DEFAULT_SOURCE.to_string(),
            max_problems: DEFAULT_MAX_PROBLEMS,
        }
    }
}

impl DiagnosticsEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: LineClassifier> DiagnosticsEngine<C> {
    /// Use a custom line classifier
    #[must_use]
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            source: DEFAULT_SOURCE.to_string(),
            max_problems: DEFAULT_MAX_PROBLEMS,
        }
    }

    /// Set the source tag
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the maximum number of diagnostics per document
    #[must_use]
    pub fn with_max_problems(mut self, max_problems: usize) -> Self {
        self.max_problems = max_problems;
        self
    }

    /// Compute every diagnostic for the document at `uri`.
    ///
    /// The index must already reflect `text`; the undeclared-identifier rule
    /// reads it.
    #[must_use]
    pub fn compute(&self, uri: &str, text: &str, index: &SymbolIndex) -> Vec<Diagnostic> {
        let lines = split_lines(text);
        let mut diagnostics = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if self.classifier.is_exempt(line) {
                continue;
            }
            let line_no = i as u32;

            diagnostics.extend(rules::malformed_declaration(&self.classifier, line_no, line));
            diagnostics.extend(rules::unbalanced_parens(line_no, line));
            diagnostics.extend(rules::dangling_conditional(&self.classifier, &lines, i));
            diagnostics.extend(rules::undeclared_identifiers(
                &self.classifier,
                index,
                uri,
                line_no,
                line,
            ));
        }

        if diagnostics.len() > self.max_problems {
            tracing::debug!(
                "{}: {} diagnostics truncated to {}",
                uri,
                diagnostics.len(),
                self.max_problems
            );
            diagnostics.truncate(self.max_problems);
        }

        diagnostics
            .into_iter()
            .map(|diagnostic| diagnostic.with_source(self.source.as_str()))
            .collect()
    }
}
