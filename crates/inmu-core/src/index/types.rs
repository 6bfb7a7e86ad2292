//! Index types

use serde::{Deserialize, Serialize};

use crate::syntax::{utf16_len, TextRange};

/// Kind of a declared symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Variable,
    Function,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Variable => "variable",
            Self::Function => "function",
        };
        write!(f, "{s}")
    }
}

/// One declaration recorded while indexing a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Declared name
    pub name: String,
    /// Variable or function
    pub kind: SymbolKind,
    /// Document the declaration came from
    pub uri: String,
    /// Line (0-indexed)
    pub line: u32,
    /// Column of the first textual occurrence of the name on the line
    pub column: u32,
    /// Documentation comment attached to the declaration
    pub doc_comment: Option<String>,
}

impl Occurrence {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        uri: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            uri: uri.into(),
            line,
            column,
            doc_comment: None,
        }
    }

    /// Attach a documentation comment
    #[must_use]
    pub fn with_doc_comment(mut self, doc: Option<String>) -> Self {
        self.doc_comment = doc;
        self
    }

    /// Range covering the declared name
    #[must_use]
    pub fn range(&self) -> TextRange {
        TextRange::on_line(self.line, self.column, self.column + utf16_len(&self.name))
    }
}
