//! CLI module for appendstore
//!
//! Provides command-line access to a store file:
//! - exists: Whether the file is present
//! - read: Print every record (literal or JSON)
//! - append: Append one record
//! - write: Replace the content with records from stdin
//! - count: Number of records

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, OutputFormat};
pub use commands::{append, count, exists, read, run, run_command, write};
pub use config::CliConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_literals, write_lines};
