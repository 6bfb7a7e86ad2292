//! Documentation comment collection
//!
//! A `/** ... */` block is attached to the next declaration. Statement lines
//! in between discard it; blank lines and line comments do not.

use super::classifier::{BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN};

/// A collected documentation block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// Cleaned comment text (may be empty)
    pub text: String,
    /// Index of the last line the block consumed
    pub end_line: usize,
    /// False when the document ended before the closing marker
    pub terminated: bool,
}

impl CommentBlock {
    /// Collect the block opening at `start`.
    ///
    /// Consumes lines through the first one whose trimmed form ends with the
    /// closing marker, or through the end of the document.
    #[must_use]
    pub fn collect(lines: &[&str], start: usize) -> Self {
        let mut body = Vec::new();
        let mut end_line = start;
        let mut terminated = false;

        for (i, line) in lines.iter().enumerate().skip(start) {
            let trimmed = line.trim();
            end_line = i;
            body.push(clean_line(trimmed));
            if trimmed.ends_with(BLOCK_COMMENT_CLOSE) {
                terminated = true;
                break;
            }
        }

        let text = body
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        Self {
            text,
            end_line,
            terminated,
        }
    }
}

/// Strip the markers and the leading `*` decoration from one trimmed line
fn clean_line(trimmed: &str) -> &str {
    let line = trimmed.strip_prefix(BLOCK_COMMENT_OPEN).unwrap_or(trimmed);
    let line = line.strip_suffix(BLOCK_COMMENT_CLOSE).unwrap_or(line);
    let decorated = line.trim_start();
    match decorated.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

/// Holds the pending documentation comment during one indexing pass
#[derive(Debug, Default)]
pub struct CommentCollector {
    pending: Option<String>,
}

impl CommentCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the block opening at `start` and make it pending.
    ///
    /// Returns the index of the last consumed line.
    pub fn collect(&mut self, lines: &[&str], start: usize) -> usize {
        let block = CommentBlock::collect(lines, start);
        if !block.terminated {
            tracing::debug!(
                "Unterminated doc comment at line {} consumed the rest of the document",
                start + 1
            );
        }
        self.pending = (!block.text.is_empty()).then_some(block.text);
        block.end_line
    }

    /// Take the pending comment for a declaration
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Drop the pending comment
    pub fn clear(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}
