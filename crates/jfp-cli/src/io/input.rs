use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

/// Read raw input bytes from a file, or stdin when `input` is `None` or `-`.
pub fn read_input(input: Option<&str>) -> Result<Vec<u8>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => fs::read(path).with_context(|| format!("failed to read {path}")),
    }
}

/// Read input that must be UTF-8 text.
pub fn read_input_text(input: Option<&str>) -> Result<String> {
    let bytes = read_input(input)?;
    let text = jfp_core::pipeline::parse::require_text(&bytes)?;
    Ok(text.to_owned())
}

/// Read a fingerprint list: one per line, trimmed, blank lines skipped.
pub fn read_fingerprint_list(path: &str) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    Ok(parse_fingerprint_list(&raw))
}

fn parse_fingerprint_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}
