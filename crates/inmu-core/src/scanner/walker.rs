//! File walker: Discovers INMU files in a directory tree

use std::path::{Path, PathBuf};

use async_lsp::lsp_types::Url;
use ignore::WalkBuilder;

/// File extension of INMU source files
pub const SOURCE_EXTENSION: &str = "inmu";

/// A source file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
}

impl DiscoveredFile {
    /// Document URI for this file
    #[must_use]
    pub fn uri(&self) -> String {
        path_to_uri(&self.path)
    }

    /// Read the file contents
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self) -> std::io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

/// Scanner for discovering INMU files under a root
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scan the directory and return discovered files.
    ///
    /// A root that is itself an INMU file yields just that file.
    pub fn scan(&self) -> impl Iterator<Item = DiscoveredFile> + '_ {
        WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| is_source_file(path))
            .map(|path| DiscoveredFile { path })
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// Percent-encoded `file://` URI for a path.
///
/// Existing files are canonicalized, so `..` segments and symlinks resolve
/// to one URI per file. Missing files are made absolute against the current
/// directory.
#[must_use]
pub fn path_to_uri(path: &Path) -> String {
    let resolved = std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf());
    Url::from_file_path(&resolved).map_or_else(
        |()| format!("file://{}", resolved.display()),
        |url| url.to_string(),
    )
}
