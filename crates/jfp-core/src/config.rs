//! Configuration structures for jfp-core.
//!
//! This module defines explicit configuration objects used by higher-level
//! components (CLI, services embedding the library) to select the fingerprint
//! algorithm and resource limits.
//!
//! The core crate itself does not read environment variables. All configuration
//! must be provided explicitly by the caller to preserve determinism.

use crate::determinism::hashing::HashFunction;
use crate::errors::{JfpError, JfpResult};
use crate::version::FingerprintVersion;

/// Global configuration container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintConfig {
    pub hash_function: HashFunction,
    pub version: FingerprintVersion,
    pub limits: LimitsConfig,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            hash_function: HashFunction::Sha256,
            version: FingerprintVersion::LATEST,
            limits: LimitsConfig::default(),
        }
    }
}

impl FingerprintConfig {
    /// Build a config from the public selectors (`"sha256"`, `1`).
    ///
    /// The version is validated before the hash function.
    pub fn from_selectors(hash_function: &str, version: u32) -> JfpResult<Self> {
        let version = FingerprintVersion::parse(version)?;
        let hash_function = version.require_hash_function(hash_function)?;
        Ok(Self {
            hash_function,
            version,
            limits: LimitsConfig::default(),
        })
    }
}

/// Resource limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitsConfig {
    /// Maximum nesting depth walked by the flattener.
    pub max_depth: usize,
    /// Maximum accepted input size in bytes.
    pub max_input_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_input_bytes: 64 * 1024 * 1024,
        }
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &FingerprintConfig) -> JfpResult<()> {
    if cfg.limits.max_depth == 0 {
        return Err(JfpError::invalid_config(
            "max_depth must be greater than zero",
        ));
    }

    if cfg.limits.max_input_bytes == 0 {
        return Err(JfpError::invalid_config(
            "max_input_bytes must be greater than zero",
        ));
    }

    if !cfg.version.hash_functions().contains(&cfg.hash_function) {
        return Err(JfpError::invalid_config(format!(
            "hash function {} is not available for version {}",
            cfg.hash_function, cfg.version
        )));
    }

    Ok(())
}
