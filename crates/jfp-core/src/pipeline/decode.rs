//! Fingerprint decoding.
//!
//! Pure parse of the text form; nothing is recomputed.

use crate::determinism::hashing::HashFunction;
use crate::errors::JfpResult;
use crate::model::Fingerprint;

/// Decode a fingerprint into `(version, hash function, hex digest)`.
///
/// Fails with `FingerprintFormat` unless the string is exactly
/// `jfpv<version>$<hash function>$<digest>` with a supported version, a known
/// hash function, and the matching number of lowercase hex characters.
pub fn decode(fingerprint: &str) -> JfpResult<(u32, HashFunction, String)> {
    Ok(Fingerprint::parse(fingerprint)?.into_parts())
}
