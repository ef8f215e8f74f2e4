//! Fingerprint creation.
//!
//! Validation order is fixed: version, then input text, then hash function,
//! then JSON parsing. The first failing check decides the error.

use serde_json::Value;
use tracing::debug;

use crate::algorithm;
use crate::config::{validate_config, FingerprintConfig};
use crate::errors::JfpResult;
use crate::model::Fingerprint;
use crate::pipeline::parse::{parse_json_str, require_text};
use crate::version::FingerprintVersion;

/// Create a fingerprint string from JSON text.
///
/// `hash_function` is one of `"sha256"`, `"sha384"`, `"sha512"`; `version`
/// selects the algorithm (currently only `1`).
pub fn create(input: &str, hash_function: &str, version: u32) -> JfpResult<String> {
    create_from_bytes(input.as_bytes(), hash_function, version)
}

/// Create a fingerprint string from raw bytes that must hold UTF-8 JSON text.
pub fn create_from_bytes(input: &[u8], hash_function: &str, version: u32) -> JfpResult<String> {
    let version = FingerprintVersion::parse(version)?;
    let text = require_text(input)?;
    let cfg = FingerprintConfig {
        hash_function: version.require_hash_function(hash_function)?,
        version,
        ..FingerprintConfig::default()
    };
    create_with_config(text, &cfg)
}

/// Create a fingerprint string using an explicit configuration.
pub fn create_with_config(input: &str, cfg: &FingerprintConfig) -> JfpResult<String> {
    validate_config(cfg)?;
    let value = parse_json_str(input, &cfg.limits)?;
    Ok(fingerprint_value(&value, cfg)?.to_string())
}

/// Fingerprint an already parsed value.
pub fn fingerprint_value(value: &Value, cfg: &FingerprintConfig) -> JfpResult<Fingerprint> {
    let fp = algorithm::compose(value, cfg.hash_function, cfg.version, &cfg.limits)?;
    debug!(version = %fp.version, hash_function = %fp.hash_function, "fingerprint created");
    Ok(fp)
}
