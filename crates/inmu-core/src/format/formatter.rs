//! Document formatter

use serde::{Deserialize, Serialize};

use crate::syntax::{split_lines, utf16_len, Position, TextRange};

/// Indent width used when none (or zero) is given
pub const DEFAULT_TAB_SIZE: u32 = 4;

/// Indentation settings supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingOptions {
    pub tab_size: u32,
    pub insert_spaces: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
            insert_spaces: true,
        }
    }
}

impl FormattingOptions {
    #[must_use]
    pub const fn new(tab_size: u32, insert_spaces: bool) -> Self {
        Self {
            tab_size,
            insert_spaces,
        }
    }

    /// Text emitted per indentation level
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if !self.insert_spaces {
            return "\t".to_string();
        }
        let width = if self.tab_size == 0 {
            DEFAULT_TAB_SIZE
        } else {
            self.tab_size
        };
        " ".repeat(width as usize)
    }
}

/// Replacement of `range` with `new_text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: String,
}

/// Re-indent `text` by brace depth.
///
/// Each line is trimmed; a line starting with `}` dedents itself, a line
/// ending with `{` indents the lines after it. The returned edit spans the
/// whole original document.
#[must_use]
pub fn format_document(text: &str, options: &FormattingOptions) -> TextEdit {
    let lines = split_lines(text);
    let unit = options.indent_unit();
    let mut level = 0usize;

    let formatted: Vec<String> = lines
        .iter()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with('}') {
                level = level.saturating_sub(1);
            }
            let out = format!("{}{trimmed}", unit.repeat(level));
            if trimmed.ends_with('{') {
                level += 1;
            }
            out
        })
        .collect();

    let last = lines.len().saturating_sub(1);
    let end = Position::new(
        last as u32,
        lines.last().map_or(0, |line| utf16_len(line)),
    );

    TextEdit {
        range: TextRange::new(Position::new(0, 0), end),
        new_text: formatted.join("\n"),
    }
}
