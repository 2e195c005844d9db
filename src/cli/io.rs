//! JSON output handling for CLI
//!
//! The `run` command emits one JSON object per tick on stdout so the
//! trace can be piped into other tools.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a serializable value as a single JSON line to stdout
pub fn write_json_line<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
