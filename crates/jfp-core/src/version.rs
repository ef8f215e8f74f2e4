//! Version helpers.
//!
//! This module centralizes algorithm version parsing and validation. It is
//! intentionally strict: a fingerprint tagged with a version is only ever
//! computed and compared with that version's algorithm.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::determinism::hashing::HashFunction;
use crate::errors::{JfpError, JfpResult};

/// Known fingerprint algorithm versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum FingerprintVersion {
    V1,
}

impl FingerprintVersion {
    /// Every supported version, oldest first.
    pub const ALL: [FingerprintVersion; 1] = [Self::V1];

    /// The version used when callers do not choose one.
    pub const LATEST: FingerprintVersion = Self::V1;

    /// Parse a numeric version (e.g. `1`).
    pub fn parse(v: u32) -> JfpResult<Self> {
        match v {
            1 => Ok(Self::V1),
            _ => Err(JfpError::UnsupportedVersion {
                expected: Self::numbers(),
                actual: v,
            }),
        }
    }

    /// Return the numeric tag used in fingerprints.
    pub fn as_u32(&self) -> u32 {
        match self {
            Self::V1 => 1,
        }
    }

    /// Hash functions this version may be combined with.
    pub fn hash_functions(&self) -> &'static [HashFunction] {
        match self {
            Self::V1 => &HashFunction::ALL,
        }
    }

    /// Validate a hash function name against this version's table.
    pub fn require_hash_function(&self, name: &str) -> JfpResult<HashFunction> {
        let unsupported = || JfpError::UnsupportedHashFunction {
            expected: self.hash_functions().iter().map(|h| h.as_str()).collect(),
            actual: name.to_string(),
        };
        let alg = HashFunction::parse(name).map_err(|_| unsupported())?;
        if self.hash_functions().contains(&alg) {
            Ok(alg)
        } else {
            Err(unsupported())
        }
    }

    pub fn numbers() -> Vec<u32> {
        Self::ALL.iter().map(|v| v.as_u32()).collect()
    }
}

impl fmt::Display for FingerprintVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl From<FingerprintVersion> for u32 {
    fn from(v: FingerprintVersion) -> Self {
        v.as_u32()
    }
}

impl TryFrom<u32> for FingerprintVersion {
    type Error = JfpError;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        Self::parse(v)
    }
}
