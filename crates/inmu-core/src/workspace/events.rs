//! Document lifecycle events

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, Severity};

/// What happened to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Opened,
    Changed,
    Closed,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Opened => "opened",
            Self::Changed => "changed",
            Self::Closed => "closed",
        };
        write!(f, "{s}")
    }
}

/// A document event carrying the full current text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEvent {
    pub uri: String,
    /// Full text; empty for a close
    pub text: String,
    pub kind: ChangeKind,
}

impl DocumentEvent {
    #[must_use]
    pub fn opened(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
            kind: ChangeKind::Opened,
        }
    }

    #[must_use]
    pub fn changed(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
            kind: ChangeKind::Changed,
        }
    }

    #[must_use]
    pub fn closed(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: String::new(),
            kind: ChangeKind::Closed,
        }
    }
}

/// Diagnostics published for one document after an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    pub uri: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsReport {
    #[must_use]
    pub fn new(uri: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            uri: uri.into(),
            diagnostics,
        }
    }

    /// Number of diagnostics with the given severity
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == severity)
            .count()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}
