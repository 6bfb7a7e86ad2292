//! Loading configuration and source files into a workspace

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use inmu_core::{DiagnosticsReport, DiscoveredFile, Scanner, ServiceConfig, Workspace};
use tracing::{debug, info};

/// A source file opened in a workspace, with the diagnostics from opening it
#[derive(Debug)]
pub struct OpenedFile {
    pub path: PathBuf,
    pub uri: String,
    pub report: DiagnosticsReport,
}

/// A workspace holding every source file under a root
#[derive(Debug)]
pub struct LoadedTree {
    pub workspace: Workspace,
    pub files: Vec<OpenedFile>,
}

/// Load the configuration file, or the defaults when none is given
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let Some(path) = path else {
        return Ok(ServiceConfig::default());
    };
    let config = ServiceConfig::from_file(path)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Read `path` and open it in `workspace`
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn open_file(workspace: &mut Workspace, path: &Path) -> Result<OpenedFile> {
    open_discovered(
        workspace,
        DiscoveredFile {
            path: path.to_path_buf(),
        },
    )
}

fn open_discovered(workspace: &mut Workspace, file: DiscoveredFile) -> Result<OpenedFile> {
    let text = file
        .read()
        .with_context(|| format!("Failed to read {}", file.path.display()))?;
    let uri = file.uri();
    let report = workspace.open(uri.clone(), text);
    Ok(OpenedFile {
        path: file.path,
        uri,
        report,
    })
}

/// Open every `.inmu` file under `root`, in path order
///
/// # Errors
/// Returns an error if the root does not exist or a file cannot be read.
pub fn open_tree(root: &Path, config: ServiceConfig) -> Result<LoadedTree> {
    if !root.exists() {
        bail!("{} does not exist", root.display());
    }

    let mut discovered: Vec<_> = Scanner::new(root).scan().collect();
    discovered.sort_by(|a, b| a.path.cmp(&b.path));

    let mut workspace = Workspace::new(config);
    let mut files = Vec::with_capacity(discovered.len());
    for file in discovered {
        files.push(open_discovered(&mut workspace, file)?);
    }

    info!("Opened {} files under {}", files.len(), root.display());
    Ok(LoadedTree { workspace, files })
}
