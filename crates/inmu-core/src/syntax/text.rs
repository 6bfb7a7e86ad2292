//! Text positions and word scanning
//!
//! Columns are UTF-16 code units, as LSP hosts count them. Word scanning is
//! ASCII based: a word character is `[A-Za-z0-9_]`.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column in UTF-16 code units (0-indexed)
    pub column: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A half-open range between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering `start_col..end_col` on a single line
    #[must_use]
    pub const fn on_line(line: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(line, start_col),
            end: Position::new(line, end_col),
        }
    }

    /// Range covering a whole line of text
    #[must_use]
    pub fn full_line(line: u32, text: &str) -> Self {
        Self::on_line(line, 0, utf16_len(text))
    }

    /// Range covering `len` bytes of `text` starting at byte `offset`
    #[must_use]
    pub fn of_bytes(line: u32, text: &str, offset: usize, len: usize) -> Self {
        Self::on_line(
            line,
            utf16_column(text, offset),
            utf16_column(text, offset + len),
        )
    }
}

/// Split text into lines, accepting both `\n` and `\r\n` terminators.
///
/// Empty text yields a single empty line, matching how editors count lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Length of `text` in UTF-16 code units
#[must_use]
pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

/// Convert a byte offset within `line` to a UTF-16 column.
///
/// Offsets past the end of the line map to the line length.
#[must_use]
pub fn utf16_column(line: &str, offset: usize) -> u32 {
    line.char_indices()
        .take_while(|(i, _)| *i < offset)
        .map(|(_, c)| c.len_utf16() as u32)
        .sum()
}

/// Convert a UTF-16 column to a byte offset within `line`.
///
/// Columns past the end of the line are clamped to the line length.
#[must_use]
pub fn byte_offset(line: &str, column: u32) -> usize {
    let mut units = 0u32;
    for (offset, c) in line.char_indices() {
        if units >= column {
            return offset;
        }
        units += c.len_utf16() as u32;
    }
    line.len()
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterator over maximal runs of word characters
struct WordRuns<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for WordRuns<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.line.as_bytes();
        while self.pos < bytes.len() && !is_word_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() && is_word_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        Some((start, &self.line[start..self.pos]))
    }
}

/// Maximal runs of word characters as `(byte_offset, run)` pairs
pub fn word_runs(line: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    WordRuns { line, pos: 0 }
}

/// Identifier-shaped tokens: word runs that do not start with a digit
pub fn identifiers(line: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    word_runs(line).filter(|(_, run)| !run.starts_with(|c: char| c.is_ascii_digit()))
}

/// Byte offsets of whole-word matches of `word` in `line`
pub fn whole_word_matches<'a>(line: &'a str, word: &'a str) -> impl Iterator<Item = usize> + 'a {
    word_runs(line)
        .filter(move |(_, run)| *run == word)
        .map(|(offset, _)| offset)
}

/// Byte spans of `"..."` and `'...'` literals, quotes included.
///
/// A quote without a matching closing quote on the same line is not a
/// literal; scanning resumes right after it.
#[must_use]
pub fn string_literal_spans(line: &str) -> Vec<Range<usize>> {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let quote = bytes[i];
        if quote == b'"' || quote == b'\'' {
            if let Some(len) = bytes[i + 1..].iter().position(|&b| b == quote) {
                let end = i + len + 2;
                spans.push(i..end);
                i = end;
                continue;
            }
        }
        i += 1;
    }

    spans
}

/// The word touching `column`: the word characters ending at the column
/// joined with those starting at it.
///
/// Returns the byte offset of the word and the word itself.
#[must_use]
pub fn word_at(line: &str, column: u32) -> Option<(usize, &str)> {
    let offset = byte_offset(line, column);
    let bytes = line.as_bytes();

    let start = bytes[..offset]
        .iter()
        .rposition(|&b| !is_word_byte(b))
        .map_or(0, |i| i + 1);
    let end = bytes[offset..]
        .iter()
        .position(|&b| !is_word_byte(b))
        .map_or(bytes.len(), |i| offset + i);

    (start < end).then(|| (start, &line[start..end]))
}
