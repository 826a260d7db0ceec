//! CLI argument definitions using clap
//!
//! Commands:
//! - appendstore exists --file <path>
//! - appendstore read --file <path> [--format literal|json]
//! - appendstore append --file <path> <LITERAL>
//! - appendstore write --file <path>   (records from stdin)
//! - appendstore count --file <path>

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// appendstore - inspect and edit NUL-separated literal record files
#[derive(Parser, Debug)]
#[command(name = "appendstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at TRACE instead of the configured level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print whether the store file exists
    Exists {
        /// Path to the store file
        #[arg(long)]
        file: PathBuf,
    },

    /// Print every record, one per line
    Read {
        /// Path to the store file
        #[arg(long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Literal)]
        format: OutputFormat,
    },

    /// Append one record given as literal text
    Append {
        /// Path to the store file
        #[arg(long)]
        file: PathBuf,

        /// The record, e.g. "{'user': 'cmkadmin', 'time': 1700000000}"
        literal: String,
    },

    /// Replace the content with records read from stdin, one per line
    Write {
        /// Path to the store file
        #[arg(long)]
        file: PathBuf,
    },

    /// Print the number of records
    Count {
        /// Path to the store file
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Literal text, as stored
    Literal,
    /// One JSON value per line
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
