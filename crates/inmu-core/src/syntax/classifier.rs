//! Line classification
//!
//! The indexer and the diagnostics rules only see source lines through
//! [`LineClassifier`]. [`PatternClassifier`] recognizes lines with regular
//! expressions; a tokenizer-backed implementation can replace it without
//! changing the index, diagnostics or query contracts.

use std::sync::LazyLock;

use regex::Regex;

use crate::index::SymbolKind;

/// Opens a documentation comment block
pub const BLOCK_COMMENT_OPEN: &str = "/**";
/// Closes a documentation comment block
pub const BLOCK_COMMENT_CLOSE: &str = "*/";
/// Prefixes of single-line comments
pub const LINE_COMMENT_MARKERS: &[&str] = &["#", "//"];

const DECLARATION_PREFIX: &str = "let ";
const CONDITIONAL_PREFIX: &str = "if ";
const FUNCTION_PREFIX: &str = "fn ";
const BLOCK_TERMINATOR: &str = "endif";

#[allow(clippy::expect_used)]
static VARIABLE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*let\s+([A-Za-z_][A-Za-z0-9_]*)\s*=").expect("variable pattern is valid")
});

#[allow(clippy::expect_used)]
static FUNCTION_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*fn\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("function pattern is valid")
});

#[allow(clippy::expect_used)]
static BARE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*let\s+[A-Za-z0-9_]+\s*$").expect("bare declaration pattern is valid")
});

/// What a single source line is, as far as indexing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only
    Blank,
    /// Starts with a line-comment marker
    LineComment,
    /// Starts a `/** ... */` documentation block
    BlockCommentStart,
    /// `let name =` or `fn name(`
    Declaration { name: &'a str, kind: SymbolKind },
    /// Anything else
    Statement,
}

/// Recognizes the line shapes the engine cares about
pub trait LineClassifier {
    /// Classify a raw line for indexing.
    ///
    /// Priority: block-comment start, variable declaration, function
    /// declaration.
    fn classify<'a>(&self, line: &'a str) -> LineKind<'a>;

    /// `let name` with nothing after the identifier and no `=` anywhere
    fn is_malformed_declaration(&self, line: &str) -> bool;

    /// Statement introduced by the declaration keyword
    fn is_declaration_statement(&self, line: &str) -> bool;

    /// `if ...` without a brace on the same line
    fn is_open_conditional(&self, line: &str) -> bool;

    /// The keyword closing a brace-less conditional
    fn is_block_terminator(&self, line: &str) -> bool;

    /// A line that begins a new conditional or function
    fn starts_new_block(&self, line: &str) -> bool;

    /// Lines exempt from every diagnostic rule
    fn is_exempt(&self, line: &str) -> bool {
        matches!(
            self.classify(line),
            LineKind::Blank | LineKind::LineComment
        )
    }
}

/// Regex-backed [`LineClassifier`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternClassifier;

impl PatternClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn declaration<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
        pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|name| name.as_str())
    }
}

impl LineClassifier for PatternClassifier {
    fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if LINE_COMMENT_MARKERS
            .iter()
            .any(|marker| trimmed.starts_with(marker))
        {
            return LineKind::LineComment;
        }
        if trimmed.starts_with(BLOCK_COMMENT_OPEN) {
            return LineKind::BlockCommentStart;
        }
        if let Some(name) = Self::declaration(&VARIABLE_DECLARATION, line) {
            return LineKind::Declaration {
                name,
                kind: SymbolKind::Variable,
            };
        }
        if let Some(name) = Self::declaration(&FUNCTION_DECLARATION, line) {
            return LineKind::Declaration {
                name,
                kind: SymbolKind::Function,
            };
        }
        LineKind::Statement
    }

    fn is_malformed_declaration(&self, line: &str) -> bool {
        BARE_DECLARATION.is_match(line.trim()) && !line.contains('=')
    }

    fn is_declaration_statement(&self, line: &str) -> bool {
        line.trim().starts_with(DECLARATION_PREFIX)
    }

    fn is_open_conditional(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.starts_with(CONDITIONAL_PREFIX) && !trimmed.contains('{')
    }

    fn is_block_terminator(&self, line: &str) -> bool {
        line.trim() == BLOCK_TERMINATOR
    }

    fn starts_new_block(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.starts_with(CONDITIONAL_PREFIX) || trimmed.starts_with(FUNCTION_PREFIX)
    }
}
