use anyhow::Result;
use serde_json::Value;

use jfp_core::algorithm::v1;
use jfp_core::config::FingerprintConfig;
use jfp_core::determinism::canonical_json::to_canonical_string;
use jfp_core::pipeline::parse::parse_json_bytes;
use jfp_core::version::FingerprintVersion;
use jfp_core::JfpResult;

use crate::cmd::Outcome;
use crate::io::input;
use crate::output;

pub fn run(input_path: Option<&str>, hash: &str, raw: bool) -> Result<Outcome> {
    let cfg = FingerprintConfig::from_selectors(hash, FingerprintVersion::LATEST.as_u32())?;
    let bytes = input::read_input(input_path)?;
    let value = parse_json_bytes(&bytes, &cfg.limits)?;

    let leaves = if raw {
        v1::flatten_debug(&value, cfg.hash_function, &cfg.limits)?
    } else {
        v1::flatten(&value, cfg.hash_function, &cfg.limits)?
    };
    let rendered: Vec<Value> = leaves.iter().map(|l| l.to_json()).collect();

    let plain = rendered
        .iter()
        .map(to_canonical_string)
        .collect::<JfpResult<Vec<_>>>()?;
    output::print(&rendered, &plain)?;
    Ok(Outcome::Success)
}
