//! Tests for DiagnosticsEngine

use crate::diagnostics::{Diagnostic, DiagnosticsEngine, Severity, DEFAULT_SOURCE};
use crate::index::{SymbolIndex, SymbolIndexer};
use crate::syntax::TextRange;

const URI: &str = "file:///main.inmu";

/// Index `text` first, as the workspace does, then compute diagnostics
fn analyze(text: &str) -> Vec<Diagnostic> {
    let mut index = SymbolIndex::new();
    SymbolIndexer::new().reindex(&mut index, URI, text);
    DiagnosticsEngine::new().compute(URI, text, &index)
}

#[test]
fn test_parameters_are_reported_as_undeclared() {
    let text = "# greet\nlet name = \"inmu\"\nfn greet(x) {\n  print name\n}\n";
    let diagnostics = analyze(text);

    // The lexical rule has no notion of parameters
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].range, TextRange::on_line(2, 9, 10));
    assert!(diagnostics[0].message.contains("'x'"));
}

#[test]
fn test_bracket_error_on_open_paren() {
    let diagnostics = analyze("fn foo(\nfoo(1, 2");
    let errors: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error && d.range.start.line == 1)
        .collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].range, TextRange::on_line(1, 3, 4));
}

#[test]
fn test_malformed_declaration_reported_once() {
    let diagnostics = analyze("let y");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].range, TextRange::on_line(0, 0, 5));

    assert!(analyze("let y = 2").is_empty());
}

#[test]
fn test_dangling_conditional_cleared_by_endif() {
    let text = "let x = 1\nif x > 0\nprint x";
    let warnings: Vec<_> = analyze(text)
        .into_iter()
        .filter(|d| d.severity == Severity::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].range.start.line, 1);

    let fixed = format!("{text}\nendif");
    assert!(analyze(&fixed).is_empty());
}

#[test]
fn test_undeclared_identifier_cleared_by_declaration() {
    let diagnostics = analyze("print z");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].range, TextRange::on_line(0, 6, 7));

    assert!(analyze("let z = 0\nprint z").is_empty());
}

#[test]
fn test_forward_declaration_counts() {
    assert!(analyze("print later()\nfn later() {\n}").is_empty());
}

#[test]
fn test_comment_and_blank_lines_are_exempt() {
    assert!(analyze("# foo(\n\n   \n// let y").is_empty());
}

#[test]
fn test_rules_are_cumulative_on_one_line() {
    let diagnostics = analyze("if q(1");
    let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();

    assert_eq!(diagnostics.len(), 3);
    assert!(messages.contains(&"missing closing ')'"));
    assert!(messages.contains(&"conditional requires a brace block or terminator keyword"));
    assert!(messages.iter().any(|m| m.contains("'q'")));
}

#[test]
fn test_source_tag_applied() {
    let diagnostics = analyze("print z");
    assert_eq!(diagnostics[0].source, DEFAULT_SOURCE);

    let index = SymbolIndex::new();
    let custom = DiagnosticsEngine::new()
        .with_source("inmu-lint")
        .compute(URI, "print z", &index);
    assert_eq!(custom[0].source, "inmu-lint");
}

#[test]
fn test_max_problems_truncates() {
    let index = SymbolIndex::new();
    let engine = DiagnosticsEngine::new().with_max_problems(2);
    let diagnostics = engine.compute(URI, "a b c d", &index);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[1].range.start.column, 2);
}
