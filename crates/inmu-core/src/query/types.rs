//! Query result types

use serde::{Deserialize, Serialize};

use crate::index::{Occurrence, SymbolKind};
use crate::syntax::{KeywordCategory, TextRange};

/// A range inside a specific document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub uri: String,
    pub range: TextRange,
}

impl Location {
    #[must_use]
    pub fn new(uri: impl Into<String>, range: TextRange) -> Self {
        Self {
            uri: uri.into(),
            range,
        }
    }
}

impl From<&Occurrence> for Location {
    fn from(occurrence: &Occurrence) -> Self {
        Self::new(occurrence.uri.clone(), occurrence.range())
    }
}

/// Markdown shown for the word under the cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    /// Markdown text
    pub contents: String,
    /// Range of the hovered word
    pub range: Option<TextRange>,
}

/// One entry of a document's symbol outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDescriptor {
    pub name: String,
    pub kind: SymbolKind,
    pub location: Location,
}

impl From<&Occurrence> for SymbolDescriptor {
    fn from(occurrence: &Occurrence) -> Self {
        Self {
            name: occurrence.name.clone(),
            kind: occurrence.kind,
            location: Location::from(occurrence),
        }
    }
}

/// Kind of a completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionKind {
    Keyword,
    Function,
    Constant,
    Variable,
}

impl From<KeywordCategory> for CompletionKind {
    fn from(category: KeywordCategory) -> Self {
        match category {
            KeywordCategory::Keyword => Self::Keyword,
            KeywordCategory::Builtin => Self::Function,
            KeywordCategory::Constant => Self::Constant,
        }
    }
}

impl From<SymbolKind> for CompletionKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Variable => Self::Variable,
            SymbolKind::Function => Self::Function,
        }
    }
}

/// A completion proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: Option<String>,
    /// Markdown documentation
    pub documentation: Option<String>,
    /// Text to insert when it differs from the label
    pub insert_text: Option<String>,
}
