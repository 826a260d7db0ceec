//! Line-oriented I/O for the CLI
//!
//! - Input: one literal per line, blank lines ignored
//! - Output: one record per line
//! - UTF-8 only

use std::io::{BufRead, Write};

use crate::literal::{self, Literal};

use super::errors::{CliError, CliResult};

/// Parses every non-blank input line as a literal.
pub fn read_literals<R: BufRead>(input: &mut R) -> CliResult<Vec<Literal>> {
    let mut records = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = literal::parse(&line)
            .map_err(|e| CliError::invalid_input(Some(index + 1), e))?;
        records.push(record);
    }
    Ok(records)
}

/// Writes each line followed by a newline, then flushes.
pub fn write_lines<W, I, S>(output: &mut W, lines: I) -> CliResult<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(output, "{}", line.as_ref())?;
    }
    output.flush()?;
    Ok(())
}
