//! inmu: Command line tools for INMU scripts

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use inmu_cli::commands;
use inmu_cli::{setup_logging, QueryCommands};

#[derive(Parser)]
#[command(name = "inmu")]
#[command(author, version, about = "Check, format and query INMU scripts", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print LSP-shaped JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report diagnostics for a file or every .inmu file under a directory
    Check {
        /// File or directory to check
        path: PathBuf,
    },

    /// Re-indent a file by brace depth
    Format {
        /// File to format
        file: PathBuf,

        /// Spaces per indent level
        #[arg(long)]
        tab_size: Option<u32>,

        /// Indent with tabs
        #[arg(long)]
        use_tabs: bool,

        /// Write the result back instead of printing it
        #[arg(long)]
        write: bool,
    },

    /// List the declarations in a file
    Symbols {
        /// File to list
        file: PathBuf,
    },

    /// Answer a position query against every .inmu file under a root
    Query {
        /// Directory whose files are opened
        root: PathBuf,

        #[command(subcommand)]
        command: QueryCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = commands::load::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { path } => {
            commands::check::run(&path, config, cli.json)?;
        }
        Commands::Format {
            file,
            tab_size,
            use_tabs,
            write,
        } => {
            let options = commands::format::options(&config, tab_size, use_tabs);
            commands::format::run(&file, config, options, write, cli.json)?;
        }
        Commands::Symbols { file } => {
            commands::symbols::run(&file, config, cli.json)?;
        }
        Commands::Query { root, command } => {
            commands::query::run(command, &root, config, cli.json)?;
        }
    }

    Ok(())
}
