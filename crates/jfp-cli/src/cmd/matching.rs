use anyhow::Result;
use serde::Serialize;

use crate::cmd::Outcome;
use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct MatchOut<'a> {
    pub matched: bool,
    pub target: &'a str,
}

pub fn run(input_path: Option<&str>, target: &str) -> Result<Outcome> {
    let text = input::read_input_text(input_path)?;
    let matched = jfp_core::is_match(&text, target)?;

    if output::is_json() {
        output::print(&MatchOut { matched, target }, &[])?;
    } else {
        output::print_status(matched, if matched { "match" } else { "no match" })?;
    }

    Ok(if matched { Outcome::Success } else { Outcome::NoMatch })
}
