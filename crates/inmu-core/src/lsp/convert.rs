//! LSP type conversion utilities
//!
//! Converts our engine types into `async_lsp::lsp_types`.

use async_lsp::lsp_types::{
    self, CompletionItemKind, DiagnosticSeverity, Documentation, HoverContents, MarkupContent,
    MarkupKind, PublishDiagnosticsParams, SymbolInformation, Url,
};
use thiserror::Error;

use crate::diagnostics::{Diagnostic, Severity};
use crate::format::{FormattingOptions, TextEdit};
use crate::index::SymbolKind;
use crate::query::{CompletionItem, CompletionKind, Hover, Location, SymbolDescriptor};
use crate::syntax::{Position, TextRange};
use crate::workspace::DiagnosticsReport;

/// Errors that can occur while converting to LSP types
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },
}

/// Parse a document URI.
///
/// # Errors
///
/// Returns an error if `uri` is not an absolute URI.
pub fn parse_uri(uri: &str) -> Result<Url, ConvertError> {
    Url::parse(uri).map_err(|e| ConvertError::InvalidUri {
        uri: uri.to_string(),
        reason: e.to_string(),
    })
}

pub fn position_to_lsp(position: Position) -> lsp_types::Position {
    lsp_types::Position::new(position.line, position.column)
}

pub fn from_lsp_position(position: lsp_types::Position) -> Position {
    Position::new(position.line, position.character)
}

pub fn range_to_lsp(range: TextRange) -> lsp_types::Range {
    lsp_types::Range::new(position_to_lsp(range.start), position_to_lsp(range.end))
}

pub fn diagnostic_to_lsp(diagnostic: &Diagnostic) -> lsp_types::Diagnostic {
    let severity = match diagnostic.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    };
    lsp_types::Diagnostic {
        range: range_to_lsp(diagnostic.range),
        severity: Some(severity),
        source: Some(diagnostic.source.clone()),
        message: diagnostic.message.clone(),
        ..Default::default()
    }
}

/// Build the `textDocument/publishDiagnostics` payload for a report.
///
/// # Errors
///
/// Returns an error if the report's URI cannot be parsed.
pub fn publish_diagnostics_params(
    report: &DiagnosticsReport,
) -> Result<PublishDiagnosticsParams, ConvertError> {
    Ok(PublishDiagnosticsParams::new(
        parse_uri(&report.uri)?,
        report.diagnostics.iter().map(diagnostic_to_lsp).collect(),
        None,
    ))
}

/// # Errors
///
/// Returns an error if the location's URI cannot be parsed.
pub fn location_to_lsp(location: &Location) -> Result<lsp_types::Location, ConvertError> {
    Ok(lsp_types::Location::new(
        parse_uri(&location.uri)?,
        range_to_lsp(location.range),
    ))
}

pub fn hover_to_lsp(hover: &Hover) -> lsp_types::Hover {
    lsp_types::Hover {
        contents: HoverContents::Markup(markdown(&hover.contents)),
        range: hover.range.map(range_to_lsp),
    }
}

/// Convert a document symbol to the flat `SymbolInformation` form.
///
/// # Errors
///
/// Returns an error if the symbol's URI cannot be parsed.
pub fn symbol_to_lsp(symbol: &SymbolDescriptor) -> Result<SymbolInformation, ConvertError> {
    let kind = match symbol.kind {
        SymbolKind::Variable => lsp_types::SymbolKind::VARIABLE,
        SymbolKind::Function => lsp_types::SymbolKind::FUNCTION,
    };

    #[allow(deprecated)]
    let information = SymbolInformation {
        name: symbol.name.clone(),
        kind,
        tags: None,
        deprecated: None,
        location: location_to_lsp(&symbol.location)?,
        container_name: None,
    };
    Ok(information)
}

pub fn completion_item_to_lsp(item: &CompletionItem) -> lsp_types::CompletionItem {
    let kind = match item.kind {
        CompletionKind::Keyword => CompletionItemKind::KEYWORD,
        CompletionKind::Function => CompletionItemKind::FUNCTION,
        CompletionKind::Constant => CompletionItemKind::CONSTANT,
        CompletionKind::Variable => CompletionItemKind::VARIABLE,
    };
    lsp_types::CompletionItem {
        label: item.label.clone(),
        kind: Some(kind),
        detail: item.detail.clone(),
        documentation: item
            .documentation
            .as_deref()
            .map(|doc| Documentation::MarkupContent(markdown(doc))),
        insert_text: item.insert_text.clone(),
        ..Default::default()
    }
}

pub fn text_edit_to_lsp(edit: &TextEdit) -> lsp_types::TextEdit {
    lsp_types::TextEdit::new(range_to_lsp(edit.range), edit.new_text.clone())
}

pub fn formatting_options_from_lsp(options: &lsp_types::FormattingOptions) -> FormattingOptions {
    FormattingOptions::new(options.tab_size, options.insert_spaces)
}

fn markdown(value: &str) -> MarkupContent {
    MarkupContent {
        kind: MarkupKind::Markdown,
        value: value.to_string(),
    }
}
