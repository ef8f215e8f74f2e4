use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::cmd::Outcome;
use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct FindOut {
    pub candidates: usize,
    pub matches: Vec<String>,
}

/// Candidates from `--fingerprint` come first, then the `--list` file.
pub fn run(
    input_path: Option<&str>,
    mut fingerprints: Vec<String>,
    list: Option<&str>,
    dedup: bool,
) -> Result<Outcome> {
    if let Some(path) = list {
        fingerprints.extend(input::read_fingerprint_list(path)?);
    }
    let text = input::read_input_text(input_path)?;

    let matches = jfp_core::find_matches(&text, &fingerprints, dedup)?;
    info!(candidates = fingerprints.len(), matches = matches.len(), "find finished");

    let outcome = if matches.is_empty() { Outcome::NoMatch } else { Outcome::Success };
    output::print(
        &FindOut {
            candidates: fingerprints.len(),
            matches: matches.clone(),
        },
        &matches,
    )?;
    Ok(outcome)
}
