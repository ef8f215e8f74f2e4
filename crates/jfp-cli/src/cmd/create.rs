use anyhow::{Context, Result};
use serde::Serialize;

use crate::cmd::Outcome;
use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct CreateOut {
    pub fingerprint: String,
}

pub fn run(input_path: Option<&str>, hash: &str, version: u32) -> Result<Outcome> {
    let bytes = input::read_input(input_path)?;
    let fingerprint = jfp_core::create_from_bytes(&bytes, hash, version)
        .context("failed to create fingerprint")?;

    output::print(&CreateOut { fingerprint: fingerprint.clone() }, &[fingerprint])?;
    Ok(Outcome::Success)
}
