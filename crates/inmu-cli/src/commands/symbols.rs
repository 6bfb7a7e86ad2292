//! Symbols command: List declarations in a file

use std::path::Path;

use anyhow::Result;
use inmu_core::lsp::symbol_to_lsp;
use inmu_core::{ServiceConfig, SymbolDescriptor, Workspace};

use super::load::open_file;

/// Declarations in `file`, ordered by position
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn collect(file: &Path, config: ServiceConfig) -> Result<Vec<SymbolDescriptor>> {
    let mut workspace = Workspace::new(config);
    let opened = open_file(&mut workspace, file)?;
    Ok(workspace.document_symbols(&opened.uri))
}

/// Run the symbols command
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn run(file: &Path, config: ServiceConfig, json: bool) -> Result<()> {
    let symbols = collect(file, config)?;

    if json {
        let information = symbols
            .iter()
            .map(symbol_to_lsp)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&information)?);
        return Ok(());
    }

    if symbols.is_empty() {
        println!("No symbols found in {}", file.display());
        return Ok(());
    }

    println!("\n{:<40} {:<10} LOCATION", "NAME", "KIND");
    println!("{}", "-".repeat(64));
    for symbol in &symbols {
        let start = symbol.location.range.start;
        println!(
            "{:<40} {:<10} {}:{}",
            symbol.name,
            symbol.kind.to_string(),
            start.line + 1,
            start.column + 1
        );
    }

    println!("\nFound {} symbols", symbols.len());
    Ok(())
}
