//! Query command: Hover, definition and references

use std::path::Path;

use anyhow::{bail, Result};
use inmu_core::lsp::{hover_to_lsp, location_to_lsp, parse_uri};
use inmu_core::scanner::path_to_uri;
use inmu_core::{Hover, Location, Position, ServiceConfig};
use tracing::info;

use crate::commands::load::{open_file, open_tree, LoadedTree};
use crate::types::QueryCommands;

/// Result of a position query
#[derive(Debug)]
pub enum QueryOutput {
    Hover(Option<Hover>),
    Locations(Vec<Location>),
}

/// Convert a 1-based line and column to a position
///
/// # Errors
/// Returns an error if either value is zero.
pub fn to_position(line: u32, column: u32) -> Result<Position> {
    if line == 0 || column == 0 {
        bail!("line and column are 1-based");
    }
    Ok(Position::new(line - 1, column - 1))
}

/// Open every file under `root` and answer the query
///
/// # Errors
/// Returns an error if loading fails or the position is invalid.
pub fn execute(cmd: &QueryCommands, root: &Path, config: ServiceConfig) -> Result<QueryOutput> {
    let (file, line, column) = cmd.target();
    let position = to_position(line, column)?;

    let LoadedTree { mut workspace, .. } = open_tree(root, config)?;
    let mut uri = path_to_uri(file);
    if !workspace.documents().contains(&uri) {
        uri = open_file(&mut workspace, file)?.uri;
    }

    let output = match cmd {
        QueryCommands::Hover { .. } => QueryOutput::Hover(workspace.hover(&uri, position)),
        QueryCommands::Definition { .. } => {
            QueryOutput::Locations(workspace.definition(&uri, position))
        }
        QueryCommands::References { .. } => {
            QueryOutput::Locations(workspace.references(&uri, position))
        }
    };
    Ok(output)
}

/// Run the query command
///
/// # Errors
/// Returns an error if the query fails.
pub fn run(cmd: QueryCommands, root: &Path, config: ServiceConfig, json: bool) -> Result<()> {
    info!("Running {:?}", cmd);
    let output = execute(&cmd, root, config)?;

    match output {
        QueryOutput::Hover(hover) => print_hover(hover.as_ref(), json)?,
        QueryOutput::Locations(locations) => print_locations(&locations, json)?,
    }

    Ok(())
}

fn print_hover(hover: Option<&Hover>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&hover.map(hover_to_lsp))?);
        return Ok(());
    }

    match hover {
        Some(hover) => println!("{}", hover.contents),
        None => println!("No hover information"),
    }
    Ok(())
}

fn print_locations(locations: &[Location], json: bool) -> Result<()> {
    if json {
        let locations = locations
            .iter()
            .map(location_to_lsp)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&locations)?);
        return Ok(());
    }

    if locations.is_empty() {
        println!("No locations found");
        return Ok(());
    }

    for location in locations {
        let start = location.range.start;
        println!(
            "{}:{}:{}",
            display_uri(&location.uri),
            start.line + 1,
            start.column + 1
        );
    }
    println!("\nFound {} locations", locations.len());
    Ok(())
}

pub(super) fn display_uri(uri: &str) -> String {
    parse_uri(uri)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .map_or_else(|| uri.to_string(), |path| path.display().to_string())
}
