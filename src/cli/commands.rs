//! CLI command implementations
//!
//! Every command opens the store file named by `--file` with the
//! [`LiteralCodec`], so records are printed and accepted as literal text.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::Value;

use crate::literal::{self, Literal};
use crate::observability::{Logger, Severity};
use crate::store::{AppendStore, LiteralCodec};

use super::args::{Cli, Command, OutputFormat};
use super::config::CliConfig;
use super::errors::{CliError, CliResult};
use super::io::{read_literals, write_lines};

/// Parse arguments and run against the process stdin/stdout
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command(cli, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the appropriate command based on CLI args
pub fn run_command<R: BufRead, W: Write>(
    cli: Cli,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    let config = match cli.config.as_deref() {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let severity = if cli.verbose {
        Severity::Trace
    } else {
        config.log_severity()?
    };
    Logger::set_min_severity(severity);

    match cli.command {
        Command::Exists { file } => exists(&file, &config, output),
        Command::Read { file, format } => read(&file, format, &config, output),
        Command::Append { file, literal } => append(&file, &literal, &config),
        Command::Write { file } => write(&file, input, &config),
        Command::Count { file } => count(&file, &config, output),
    }
}

fn open_store(file: &Path, config: &CliConfig) -> AppendStore<LiteralCodec> {
    AppendStore::with_config(file, LiteralCodec, config.store.clone())
}

fn log_metrics(store: &AppendStore<LiteralCodec>) {
    let metrics = store.metrics().snapshot().to_json();
    Logger::info("STORE_METRICS", &[("metrics", metrics.as_str())]);
}

/// Print `true` or `false`
pub fn exists<W: Write>(file: &Path, config: &CliConfig, output: &mut W) -> CliResult<()> {
    let store = open_store(file, config);
    write_lines(output, [store.exists().to_string()])
}

/// Print every record in the requested format
pub fn read<W: Write>(
    file: &Path,
    format: OutputFormat,
    config: &CliConfig,
    output: &mut W,
) -> CliResult<()> {
    let store = open_store(file, config);
    let records = store.read()?;
    log_metrics(&store);

    let lines = records
        .into_iter()
        .map(|record| format_record(record, format))
        .collect::<CliResult<Vec<_>>>()?;
    write_lines(output, lines)
}

fn format_record(record: Literal, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Literal => Ok(record.to_text()?),
        OutputFormat::Json => {
            let value = Value::try_from(record)?;
            Ok(serde_json::to_string(&value)?)
        }
    }
}

/// Append one record parsed from `text`
pub fn append(file: &Path, text: &str, config: &CliConfig) -> CliResult<()> {
    let record = literal::parse(text)
        .map_err(|e| CliError::invalid_input(None, e))?;
    let store = open_store(file, config);
    store.append(&record)?;
    log_metrics(&store);
    Ok(())
}

/// Replace the content with the records on `input`.
///
/// All input is parsed before the file is touched.
pub fn write<R: BufRead>(file: &Path, input: &mut R, config: &CliConfig) -> CliResult<()> {
    let records = read_literals(input)?;
    let store = open_store(file, config);
    store.write(&records)?;
    log_metrics(&store);
    Ok(())
}

/// Print the number of records
pub fn count<W: Write>(file: &Path, config: &CliConfig, output: &mut W) -> CliResult<()> {
    let store = open_store(file, config);
    let records = store.read()?;
    log_metrics(&store);
    write_lines(output, [records.len().to_string()])
}
