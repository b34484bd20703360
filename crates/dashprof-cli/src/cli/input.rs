//! Interactive URL acquisition when no argument is given.

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Prompts on stdout and reads one line from stdin.
pub fn prompt_for_url() -> Result<String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "Enter the dashboard URL: ")?;
    out.flush()?;

    let stdin = io::stdin();
    read_url_line(&mut stdin.lock())
}

/// Reads one line and strips surrounding whitespace, terminator included.
/// An empty result is legal; the URL parser decides downstream.
fn read_url_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
