//! Deterministic hashing utilities for jfp.
//!
//! This module defines all hashing primitives used by the fingerprint
//! algorithms. All hashes are:
//! - deterministic
//! - explicitly parameterized
//! - rendered as lowercase hex
//!
//! Supported algorithms:
//! - sha256 (64 hex chars)
//! - sha384 (96 hex chars)
//! - sha512 (128 hex chars)
//!
//! No implicit defaults are allowed here. Callers must choose algorithms explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::determinism::canonical_json;
use crate::errors::{JfpError, JfpResult};

/// Hash function identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFunction {
    Sha256,
    Sha384,
    Sha512,
}

impl HashFunction {
    /// Every supported hash function, in a stable order.
    pub const ALL: [HashFunction; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

    /// Parse a hash function name (e.g. "sha256").
    pub fn parse(s: &str) -> JfpResult<Self> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| JfpError::UnsupportedHashFunction {
                expected: Self::names(),
                actual: s.to_string(),
            })
    }

    /// Return the canonical name used in fingerprints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Length of the lowercase hex digest.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Sha256 => 64,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|h| h.as_str()).collect()
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashFunction {
    type Err = JfpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Hash raw bytes using the selected algorithm.
pub fn hash_bytes(alg: HashFunction, bytes: &[u8]) -> Vec<u8> {
    match alg {
        HashFunction::Sha256 => Sha256::digest(bytes).to_vec(),
        HashFunction::Sha384 => Sha384::digest(bytes).to_vec(),
        HashFunction::Sha512 => Sha512::digest(bytes).to_vec(),
    }
}

/// Hash raw bytes and return lowercase hex string.
pub fn hash_bytes_hex(alg: HashFunction, bytes: &[u8]) -> String {
    hex::encode(hash_bytes(alg, bytes))
}

/// Hash the canonical JSON encoding of a value.
pub fn hash_canonical_json_hex(value: &Value, alg: HashFunction) -> JfpResult<String> {
    let bytes = canonical_json::to_canonical_bytes(value)?;
    Ok(hash_bytes_hex(alg, &bytes))
}
