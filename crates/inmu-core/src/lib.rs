//! inmu-core: Language intelligence for the INMU scripting language
//!
//! Keeps a cross-document symbol index current as source text changes,
//! derives diagnostics, and answers hover, definition, references,
//! document-symbol, completion and formatting queries.
//!
//! Recognition is shallow and line oriented: every line goes through a
//! [`syntax::LineClassifier`] instead of a grammar-driven parser.
//!
//! # Flow
//!
//! - A [`workspace::DocumentEvent`] reaches the [`Workspace`]
//! - The [`index::SymbolIndexer`] replaces that document's occurrences
//! - The [`diagnostics::DiagnosticsEngine`] recomputes its diagnostics
//! - Queries read the current [`index::SymbolIndex`] and text snapshot

pub mod config;
pub mod diagnostics;
pub mod documents;
pub mod format;
pub mod index;
pub mod lsp;
pub mod query;
pub mod scanner;
pub mod syntax;
pub mod workspace;

// Re-export commonly used types
pub use config::{ConfigError, ServiceConfig};
pub use diagnostics::{Diagnostic, DiagnosticsEngine, Severity};
pub use documents::DocumentStore;
pub use format::{format_document, FormattingOptions, TextEdit};
pub use index::{Occurrence, SymbolIndex, SymbolIndexer, SymbolKind};
pub use query::{CompletionItem, Hover, Location, SymbolDescriptor};
pub use scanner::{DiscoveredFile, Scanner};
pub use syntax::{LineClassifier, PatternClassifier, Position, TextRange};
pub use workspace::{ChangeKind, DiagnosticsReport, DocumentEvent, Workspace};
