use std::process::ExitCode;

use anyhow::Result;

use crate::args::{Cli, Command};

mod create;
mod decode;
mod find;
mod inspect;
mod matching;

/// Result of a command that ran without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NoMatch,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::NoMatch => ExitCode::from(1),
        }
    }
}

pub fn dispatch(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Command::Create { input, hash, jfp_version } => create::run(input.as_deref(), &hash, jfp_version),
        Command::Decode { fingerprint } => decode::run(&fingerprint),
        Command::Match { input, target } => matching::run(input.as_deref(), &target),
        Command::Find { input, fingerprints, list, dedup } => {
            find::run(input.as_deref(), fingerprints, list.as_deref(), dedup)
        }
        Command::Inspect { input, hash, raw } => inspect::run(input.as_deref(), &hash, raw),
    }
}
