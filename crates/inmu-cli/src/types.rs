//! Command types shared between main and library

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum QueryCommands {
    /// Show hover text for the word at a position
    Hover {
        /// File containing the position
        file: PathBuf,
        /// Line number (1-based)
        line: u32,
        /// Column (1-based)
        column: u32,
    },
    /// List declarations of the word at a position
    Definition {
        /// File containing the position
        file: PathBuf,
        /// Line number (1-based)
        line: u32,
        /// Column (1-based)
        column: u32,
    },
    /// List every use of the word at a position
    References {
        /// File containing the position
        file: PathBuf,
        /// Line number (1-based)
        line: u32,
        /// Column (1-based)
        column: u32,
    },
}

impl QueryCommands {
    /// The file and 1-based position the query targets
    #[must_use]
    pub fn target(&self) -> (&PathBuf, u32, u32) {
        match self {
            Self::Hover { file, line, column }
            | Self::Definition { file, line, column }
            | Self::References { file, line, column } => (file, *line, *column),
        }
    }
}
