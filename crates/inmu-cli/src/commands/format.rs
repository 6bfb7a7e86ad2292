//! Format command: Re-indent a file

use std::path::Path;

use anyhow::{Context, Result};
use inmu_core::lsp::text_edit_to_lsp;
use inmu_core::{FormattingOptions, ServiceConfig, TextEdit, Workspace};
use tracing::info;

use super::load::open_file;

/// Formatting options from the configuration, overridden by flags
#[must_use]
pub fn options(config: &ServiceConfig, tab_size: Option<u32>, use_tabs: bool) -> FormattingOptions {
    let defaults = config.formatting_options();
    FormattingOptions::new(
        tab_size.unwrap_or(defaults.tab_size),
        defaults.insert_spaces && !use_tabs,
    )
}

/// Compute the formatting edit for `file`
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn format_file(
    file: &Path,
    config: ServiceConfig,
    options: &FormattingOptions,
) -> Result<TextEdit> {
    let mut workspace = Workspace::new(config);
    let opened = open_file(&mut workspace, file)?;
    workspace
        .format(&opened.uri, options)
        .with_context(|| format!("{} is not open", opened.uri))
}

/// Run the format command
///
/// # Errors
/// Returns an error if the file cannot be read or written.
pub fn run(
    file: &Path,
    config: ServiceConfig,
    options: FormattingOptions,
    write: bool,
    json: bool,
) -> Result<()> {
    let edit = format_file(file, config, &options)?;

    if write {
        std::fs::write(file, &edit.new_text)
            .with_context(|| format!("Failed to write {}", file.display()))?;
        info!("Formatted {}", file.display());
    } else if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&[text_edit_to_lsp(&edit)])?
        );
    } else {
        println!("{}", edit.new_text);
    }

    Ok(())
}
