//! Integration tests for the workspace event loop
//!
//! Drive a `Workspace` through open/change/close sequences and check the
//! index, diagnostics and query answers together.

use inmu_core::lsp::{hover_to_lsp, publish_diagnostics_params, symbol_to_lsp};
use inmu_core::{
    FormattingOptions, Position, Severity, ServiceConfig, SymbolIndexer, SymbolKind, TextRange,
    Workspace,
};

const MAIN: &str = "file:///project/main.inmu";
const LIB: &str = "file:///project/lib.inmu";

const LIB_SOURCE: &str = r#"/**
 * Adds two numbers
 */
fn add(a, b) {
  return a + b
}

/** Greeting text */
let greeting = "hello"
"#;

// ============================================================================
// Indexing
// ============================================================================

#[test]
fn test_reindex_is_idempotent() {
    let indexer = SymbolIndexer::new();
    let first = indexer.scan(LIB, LIB_SOURCE);
    let second = indexer.scan(LIB, LIB_SOURCE);
    assert_eq!(first, second);

    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);
    let before = workspace.document_symbols(LIB);
    workspace.change(LIB, LIB_SOURCE);
    assert_eq!(workspace.document_symbols(LIB), before);
    assert_eq!(workspace.index().occurrence_count(), 2);
}

#[test]
fn test_editing_one_document_leaves_others_alone() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);
    workspace.open(MAIN, "let total = 1");
    let lib_symbols = workspace.document_symbols(LIB);

    workspace.change(MAIN, "let renamed = 2\nfn add() {\n}");

    assert_eq!(workspace.document_symbols(LIB), lib_symbols);
    assert!(workspace.index().lookup("total").is_empty());
    assert_eq!(workspace.index().lookup("add").len(), 2);
}

#[test]
fn test_doc_comments_attach_to_next_declaration() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);

    let add = workspace.index().lookup("add");
    assert_eq!(add[0].doc_comment.as_deref(), Some("Adds two numbers"));
    let greeting = workspace.index().lookup("greeting");
    assert_eq!(greeting[0].doc_comment.as_deref(), Some("Greeting text"));

    workspace.change(MAIN, "/** lost */\nprint 1\nlet x = 1");
    assert_eq!(workspace.index().lookup("x")[0].doc_comment, None);
}

#[test]
fn test_close_purges_immediately() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);
    workspace.open(MAIN, "print greeting");

    let report = workspace.close(LIB);
    assert!(report.diagnostics.is_empty());
    assert!(workspace.index().lookup("greeting").is_empty());
    assert!(workspace.definition(MAIN, Position::new(0, 8)).is_empty());
    assert!(workspace.document_symbols(LIB).is_empty());
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_diagnostics_follow_edits() {
    let mut workspace = Workspace::default();

    let report = workspace.open(MAIN, "foo(1, 2");
    let errors: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].range, TextRange::on_line(0, 3, 4));

    let report = workspace.change(MAIN, "let y");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].severity, Severity::Error);

    let report = workspace.change(MAIN, "let y = 2");
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_dangling_conditional_fixed_by_terminator() {
    let mut workspace = Workspace::default();

    let report = workspace.open(MAIN, "let x = 1\nif x > 0\nprint x");
    assert_eq!(report.count(Severity::Warning), 1);
    assert_eq!(report.diagnostics[0].range.start.line, 1);

    let report = workspace.change(MAIN, "let x = 1\nif x > 0\nprint x\nendif");
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_undeclared_identifier_is_per_document() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, "let z = 0");

    let report = workspace.open(MAIN, "print z");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].range, TextRange::on_line(0, 6, 7));

    let report = workspace.change(MAIN, "let z = 0\nprint z");
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_configured_source_and_cap() -> anyhow::Result<()> {
    let config = ServiceConfig::from_json_str(
        r#"{"diagnosticSource": "inmu-check", "maxNumberOfProblems": 2}"#,
    )?;
    let mut workspace = Workspace::new(config);

    let report = workspace.open(MAIN, "a\nb\nc\nd");
    assert_eq!(report.diagnostics.len(), 2);
    assert!(report.diagnostics.iter().all(|d| d.source == "inmu-check"));
    Ok(())
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_hover_and_definition_across_documents() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);
    workspace.open(MAIN, "print add(1, 2)");

    let hover = workspace.hover(MAIN, Position::new(0, 7));
    assert_eq!(
        hover.as_ref().map(|h| h.contents.as_str()),
        Some("**(function) add**\n\nAdds two numbers")
    );

    let definitions = workspace.definition(MAIN, Position::new(0, 7));
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].uri, LIB);
    assert_eq!(definitions[0].range, TextRange::on_line(3, 3, 6));
}

#[test]
fn test_references_rescan_raw_text() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);
    workspace.open(MAIN, "let message = greeting\nprint message");

    let references = workspace.references(MAIN, Position::new(0, 16));
    let found: Vec<_> = references
        .iter()
        .map(|l| (l.uri.as_str(), l.range.start.line))
        .collect();
    assert_eq!(found, vec![(LIB, 8), (MAIN, 0)]);
}

#[test]
fn test_document_symbols_in_order() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);

    let symbols = workspace.document_symbols(LIB);
    let outline: Vec<_> = symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
    assert_eq!(
        outline,
        vec![("add", SymbolKind::Function), ("greeting", SymbolKind::Variable)]
    );
}

#[test]
fn test_completion_offers_local_names() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);
    workspace.open(MAIN, "let local = 1");

    let labels: Vec<_> = workspace
        .completion(MAIN)
        .into_iter()
        .map(|item| item.label)
        .collect();
    assert!(labels.iter().any(|label| label == "print"));
    assert!(labels.iter().any(|label| label == "local"));
    assert!(!labels.iter().any(|label| label == "greeting"));
}

#[test]
fn test_format_block() {
    let mut workspace = Workspace::default();
    workspace.open(MAIN, "fn f() {\nprint 1\n}");

    let edit = workspace.format(MAIN, &FormattingOptions::new(2, true));
    assert_eq!(
        edit.map(|e| e.new_text),
        Some("fn f() {\n  print 1\n}".to_string())
    );
}

// ============================================================================
// LSP shapes
// ============================================================================

#[test]
fn test_results_convert_to_lsp() {
    let mut workspace = Workspace::default();
    workspace.open(LIB, LIB_SOURCE);
    let report = workspace.open(MAIN, "print missing");

    let params = publish_diagnostics_params(&report);
    assert!(params.is_ok_and(|p| p.diagnostics.len() == 1));

    let symbols: Result<Vec<_>, _> = workspace
        .document_symbols(LIB)
        .iter()
        .map(symbol_to_lsp)
        .collect();
    assert!(symbols.is_ok_and(|s| s.len() == 2));

    let hover = workspace.hover(LIB, Position::new(8, 5)).map(|h| hover_to_lsp(&h));
    assert!(hover.is_some());
}
