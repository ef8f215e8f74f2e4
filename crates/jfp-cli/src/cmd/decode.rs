use anyhow::Result;
use serde::Serialize;

use jfp_core::determinism::hashing::HashFunction;

use crate::cmd::Outcome;
use crate::output;

#[derive(Debug, Serialize)]
pub struct DecodeOut {
    pub version: u32,
    pub hash_function: HashFunction,
    pub digest: String,
}

pub fn run(fingerprint: &str) -> Result<Outcome> {
    let (version, hash_function, digest) = jfp_core::decode(fingerprint)?;

    let plain = vec![version.to_string(), hash_function.to_string(), digest.clone()];
    output::print(
        &DecodeOut {
            version,
            hash_function,
            digest,
        },
        &plain,
    )?;
    Ok(Outcome::Success)
}
