//! Terminal I/O for the CLI
//!
//! Queries come in as plain text lines; results go out as rendered text or
//! a single JSON object. UTF-8 only.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Read one query line from stdin
pub fn read_query() -> CliResult<String> {
    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    let query = line.trim();
    if query.is_empty() {
        return Err(CliError::io_error("empty input"));
    }
    Ok(query.to_string())
}

/// Iterate over stdin lines (for the repl command)
pub fn read_queries() -> impl Iterator<Item = CliResult<String>> {
    io::stdin()
        .lock()
        .lines()
        .map(|line| line.map_err(CliError::from))
}

/// Print a prompt without a trailing newline
pub fn write_prompt(prompt: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;
    Ok(())
}

/// Write rendered text to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

/// Write a value to stdout as one JSON line
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
