//! Workspace service

use crate::config::ServiceConfig;
use crate::diagnostics::DiagnosticsEngine;
use crate::documents::DocumentStore;
use crate::format::{format_document, FormattingOptions, TextEdit};
use crate::index::{SymbolIndex, SymbolIndexer};
use crate::query::{self, CompletionItem, Hover, Location, SymbolDescriptor};
use crate::syntax::Position;

use super::events::{ChangeKind, DiagnosticsReport, DocumentEvent};

/// Language intelligence for a set of open documents
#[derive(Debug)]
pub struct Workspace {
    config: ServiceConfig,
    index: SymbolIndex,
    documents: DocumentStore,
    indexer: SymbolIndexer,
    engine: DiagnosticsEngine,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl Workspace {
    /// Create an empty workspace
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        let engine = DiagnosticsEngine::new()
            .with_source(config.diagnostic_source.as_str())
            .with_max_problems(config.max_number_of_problems);
        Self {
            config,
            index: SymbolIndex::new(),
            documents: DocumentStore::new(),
            indexer: SymbolIndexer::new(),
            engine,
        }
    }

    /// Handle one document event and return the diagnostics to publish.
    ///
    /// Open and change reindex the document and then validate it. Close
    /// purges its occurrences and yields an empty report.
    pub fn apply(&mut self, event: DocumentEvent) -> DiagnosticsReport {
        tracing::debug!("{} {}", event.uri, event.kind);

        match event.kind {
            ChangeKind::Opened | ChangeKind::Changed => {
                let DocumentEvent { uri, text, .. } = event;
                self.indexer.reindex(&mut self.index, &uri, &text);
                let diagnostics = self.engine.compute(&uri, &text, &self.index);
                tracing::debug!("{}: {} diagnostics", uri, diagnostics.len());
                self.documents.upsert(uri.clone(), text);
                DiagnosticsReport::new(uri, diagnostics)
            }
            ChangeKind::Closed => {
                let removed = self.index.remove_document(&event.uri);
                self.documents.remove(&event.uri);
                tracing::debug!("{}: purged {} occurrences", event.uri, removed);
                DiagnosticsReport::new(event.uri, Vec::new())
            }
        }
    }

    pub fn open(&mut self, uri: impl Into<String>, text: impl Into<String>) -> DiagnosticsReport {
        self.apply(DocumentEvent::opened(uri, text))
    }

    pub fn change(&mut self, uri: impl Into<String>, text: impl Into<String>) -> DiagnosticsReport {
        self.apply(DocumentEvent::changed(uri, text))
    }

    pub fn close(&mut self, uri: impl Into<String>) -> DiagnosticsReport {
        self.apply(DocumentEvent::closed(uri))
    }

    #[must_use]
    pub fn hover(&self, uri: &str, position: Position) -> Option<Hover> {
        query::hover(&self.index, &self.documents, uri, position)
    }

    #[must_use]
    pub fn definition(&self, uri: &str, position: Position) -> Vec<Location> {
        query::definition(&self.index, &self.documents, uri, position)
    }

    #[must_use]
    pub fn references(&self, uri: &str, position: Position) -> Vec<Location> {
        query::references(&self.documents, uri, position)
    }

    #[must_use]
    pub fn document_symbols(&self, uri: &str) -> Vec<SymbolDescriptor> {
        query::document_symbols(&self.index, uri)
    }

    #[must_use]
    pub fn completion(&self, uri: &str) -> Vec<CompletionItem> {
        query::completion(&self.index, &self.documents, uri)
    }

    /// Format an open document; `None` when it is not open
    #[must_use]
    pub fn format(&self, uri: &str, options: &FormattingOptions) -> Option<TextEdit> {
        self.documents
            .get(uri)
            .map(|text| format_document(text, options))
    }

    /// Format with the configured default options
    #[must_use]
    pub fn format_with_defaults(&self, uri: &str) -> Option<TextEdit> {
        self.format(uri, &self.config.formatting_options())
    }

    #[must_use]
    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    #[must_use]
    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }
}
