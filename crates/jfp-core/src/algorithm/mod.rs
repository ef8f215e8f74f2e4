//! Fingerprint algorithms, one module per version tag.
//!
//! Version dispatch is a closed match over [`FingerprintVersion`]: a new
//! version adds a variant and a sibling module, never a branch inside an
//! existing algorithm.

use serde_json::Value;

use crate::config::LimitsConfig;
use crate::determinism::hashing::HashFunction;
use crate::errors::JfpResult;
use crate::model::Fingerprint;
use crate::version::FingerprintVersion;

pub mod v1;

/// Compose the fingerprint of a parsed value with the given algorithm version.
pub fn compose(
    value: &Value,
    alg: HashFunction,
    version: FingerprintVersion,
    limits: &LimitsConfig,
) -> JfpResult<Fingerprint> {
    match version {
        FingerprintVersion::V1 => v1::compose(value, alg, limits),
    }
}
