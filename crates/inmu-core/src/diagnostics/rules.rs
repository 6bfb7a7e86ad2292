//! Individual diagnostic rules

use crate::index::SymbolIndex;
use crate::syntax::{identifiers, keywords, string_literal_spans, LineClassifier, TextRange};

use super::types::Diagnostic;

pub(super) const MALFORMED_DECLARATION: &str = "declaration requires '=' and an initial value";
pub(super) const MISSING_CLOSING_PAREN: &str = "missing closing ')'";
pub(super) const MISSING_OPENING_PAREN: &str = "missing opening '('";
pub(super) const DANGLING_CONDITIONAL: &str =
    "conditional requires a brace block or terminator keyword";

/// `let name` without an initializer
pub(super) fn malformed_declaration<C: LineClassifier>(
    classifier: &C,
    line_no: u32,
    line: &str,
) -> Option<Diagnostic> {
    classifier
        .is_malformed_declaration(line)
        .then(|| Diagnostic::error(TextRange::full_line(line_no, line), MALFORMED_DECLARATION))
}

/// More `(` than `)` on the line, or the other way round
pub(super) fn unbalanced_parens(line_no: u32, line: &str) -> Option<Diagnostic> {
    let opens = line.matches('(').count();
    let closes = line.matches(')').count();

    if opens > closes {
        let offset = line.rfind('(')?;
        Some(Diagnostic::error(
            TextRange::of_bytes(line_no, line, offset, 1),
            MISSING_CLOSING_PAREN,
        ))
    } else if closes > opens {
        let offset = line.find(')')?;
        Some(Diagnostic::error(
            TextRange::of_bytes(line_no, line, offset, 1),
            MISSING_OPENING_PAREN,
        ))
    } else {
        None
    }
}

/// `if` without a brace whose body is never closed by the terminator.
///
/// The forward scan gives up at the next conditional or function.
pub(super) fn dangling_conditional<C: LineClassifier>(
    classifier: &C,
    lines: &[&str],
    index: usize,
) -> Option<Diagnostic> {
    let line = lines[index];
    if !classifier.is_open_conditional(line) {
        return None;
    }

    for next in &lines[index + 1..] {
        if classifier.is_block_terminator(next) {
            return None;
        }
        if classifier.starts_new_block(next) {
            break;
        }
    }

    Some(Diagnostic::warning(
        TextRange::full_line(index as u32, line),
        DANGLING_CONDITIONAL,
    ))
}

/// Identifiers with no declaration in the same document.
///
/// Purely lexical: string literal contents are ignored, reserved names are
/// skipped, and any declaration of the name anywhere in the document counts.
pub(super) fn undeclared_identifiers<C: LineClassifier>(
    classifier: &C,
    index: &SymbolIndex,
    uri: &str,
    line_no: u32,
    line: &str,
) -> Vec<Diagnostic> {
    if classifier.is_declaration_statement(line) {
        return Vec::new();
    }

    let literals = string_literal_spans(line);
    identifiers(line)
        .filter(|(offset, _)| !literals.iter().any(|span| span.contains(offset)))
        .filter(|(_, name)| !keywords::is_reserved(name) && !index.is_declared_in(name, uri))
        .map(|(offset, name)| {
            Diagnostic::warning(
                TextRange::of_bytes(line_no, line, offset, name.len()),
                format!("identifier '{name}' appears undeclared in this file"),
            )
        })
        .collect()
}
