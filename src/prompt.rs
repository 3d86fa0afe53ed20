use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};

const STDIN_HINT: &str =
    "Enter prompt (press Ctrl+D on Linux/macOS or Ctrl+Z then Enter on Windows to end):";

/// Resolves the prompt from positional arguments, falling back to stdin.
/// Returns `None` when neither source yields a non-empty prompt; the caller
/// decides how to report that.
pub fn resolve(prompt_parts: &[String]) -> Result<Option<String>> {
    if !prompt_parts.is_empty() {
        return Ok(Some(prompt_parts.join(" ")));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{STDIN_HINT}");
    }
    resolve_from_reader(prompt_parts, stdin.lock())
}

fn resolve_from_reader(prompt_parts: &[String], mut reader: impl Read) -> Result<Option<String>> {
    if !prompt_parts.is_empty() {
        return Ok(Some(prompt_parts.join(" ")));
    }

    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read prompt from stdin")?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
