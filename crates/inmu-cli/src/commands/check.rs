//! Check command: Report diagnostics

use std::path::Path;

use anyhow::{bail, Result};
use inmu_core::lsp::publish_diagnostics_params;
use inmu_core::{ServiceConfig, Severity, Workspace};

use super::load::{open_file, open_tree, OpenedFile};

/// Open a single file, or every source file under a directory
///
/// # Errors
/// Returns an error if the path does not exist or a file cannot be read.
pub fn collect(path: &Path, config: ServiceConfig) -> Result<Vec<OpenedFile>> {
    if path.is_file() {
        let mut workspace = Workspace::new(config);
        return Ok(vec![open_file(&mut workspace, path)?]);
    }
    Ok(open_tree(path, config)?.files)
}

/// Run the check command
///
/// # Errors
/// Returns an error if loading fails or any file has error diagnostics.
pub fn run(path: &Path, config: ServiceConfig, json: bool) -> Result<()> {
    let files = collect(path, config)?;

    if json {
        let params = files
            .iter()
            .map(|file| publish_diagnostics_params(&file.report))
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        for file in &files {
            for diagnostic in &file.report.diagnostics {
                println!(
                    "{}:{}:{}: {}: {}",
                    file.path.display(),
                    diagnostic.range.start.line + 1,
                    diagnostic.range.start.column + 1,
                    diagnostic.severity,
                    diagnostic.message
                );
            }
        }
    }

    let errors: usize = files
        .iter()
        .map(|file| file.report.count(Severity::Error))
        .sum();
    let warnings: usize = files
        .iter()
        .map(|file| file.report.count(Severity::Warning))
        .sum();

    if !json {
        println!(
            "\nChecked {} files: {} errors, {} warnings",
            files.len(),
            errors,
            warnings
        );
    }

    if errors > 0 {
        bail!("{errors} errors found");
    }
    Ok(())
}
