use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::determinism::hashing::HashFunction;
use crate::errors::{JfpError, JfpResult};
use crate::version::FingerprintVersion;
use crate::{FINGERPRINT_PREFIX, FINGERPRINT_SEPARATOR};

/// A decoded fingerprint.
///
/// Text form: `jfpv<version>$<hash function>$<lowercase hex digest>`, with the
/// digest length fixed by the hash function (64/96/128).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    pub version: FingerprintVersion,
    pub hash_function: HashFunction,
    pub digest: String,
}

impl Fingerprint {
    pub fn new(version: FingerprintVersion, hash_function: HashFunction, digest: impl Into<String>) -> Self {
        Self {
            version,
            hash_function,
            digest: digest.into(),
        }
    }

    /// Strictly parse the text form. Any deviation is a `FingerprintFormat` error.
    pub fn parse(s: &str) -> JfpResult<Self> {
        let bad = |reason: &str| JfpError::fingerprint_format(s, reason);

        let rest = s
            .strip_prefix(FINGERPRINT_PREFIX)
            .ok_or_else(|| bad("missing 'jfpv' prefix"))?;

        let mut parts = rest.splitn(3, FINGERPRINT_SEPARATOR);
        let (Some(version), Some(hash), Some(digest)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(bad("expected 'jfpv<version>$<hash function>$<digest>'"));
        };

        if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad("version must be a decimal number"));
        }
        if version.len() > 1 && version.starts_with('0') {
            return Err(bad("version must not have leading zeros"));
        }
        let version = version
            .parse::<u32>()
            .ok()
            .and_then(|v| FingerprintVersion::parse(v).ok())
            .ok_or_else(|| bad("unsupported version"))?;

        let hash_function = version
            .require_hash_function(hash)
            .map_err(|_| bad("unsupported hash function"))?;

        if digest.len() != hash_function.hex_len() {
            return Err(bad(&format!(
                "expected {} hex characters for {}, got {}",
                hash_function.hex_len(),
                hash_function,
                digest.len()
            )));
        }
        if !digest.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(bad("digest must be lowercase hex"));
        }

        Ok(Self::new(version, hash_function, digest))
    }

    /// Split into `(version, hash function, digest)`.
    pub fn into_parts(self) -> (u32, HashFunction, String) {
        (self.version.as_u32(), self.hash_function, self.digest)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{FINGERPRINT_PREFIX}{}{FINGERPRINT_SEPARATOR}{}{FINGERPRINT_SEPARATOR}{}",
            self.version, self.hash_function, self.digest
        )
    }
}

impl FromStr for Fingerprint {
    type Err = JfpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
