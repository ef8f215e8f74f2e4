//! Error types for jfp-core.
//!
//! Every failure is deterministic and caused by the caller's input (malformed
//! text, unsupported selectors, malformed fingerprints). Nothing here is
//! retryable. Each variant carries the offending value together with what was
//! expected, so messages can be surfaced to CLI users unchanged.

use thiserror::Error;

/// Result alias used across the crate.
pub type JfpResult<T> = Result<T, JfpError>;

/// All errors raised by jfp-core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JfpError {
    /// The input is not text (e.g. bytes that are not valid UTF-8).
    #[error("expected JSON in text form (UTF-8), instead got {actual}")]
    InputType { actual: String },

    /// The input text is not valid JSON.
    #[error("unable to load JSON: {message}")]
    JsonParse { message: String },

    /// The input exceeds the configured size limit.
    #[error("JSON input too large: {actual} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { actual: usize, limit: usize },

    /// The requested algorithm version is not supported.
    #[error("expected one of supported JSON fingerprint versions {expected:?}, instead got {actual}")]
    UnsupportedVersion { expected: Vec<u32>, actual: u32 },

    /// The requested hash function is not supported.
    #[error("expected one of supported hash functions {expected:?}, instead got '{actual}'")]
    UnsupportedHashFunction {
        expected: Vec<&'static str>,
        actual: String,
    },

    /// A fingerprint string does not follow `jfpv<version>$<hash>$<hex digest>`.
    #[error("invalid JSON fingerprint '{fingerprint}': {reason}")]
    FingerprintFormat { fingerprint: String, reason: String },

    /// A value cannot be canonically encoded (non-finite numbers).
    #[error("unable to canonically encode value: {message}")]
    Encoding { message: String },

    /// The value nests deeper than the configured limit.
    #[error("JSON nesting depth exceeds limit of {limit}")]
    DepthLimit { limit: usize },

    /// A configuration object failed validation.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl JfpError {
    pub fn input_type(actual: impl Into<String>) -> Self {
        Self::InputType {
            actual: actual.into(),
        }
    }

    pub fn json_parse(message: impl Into<String>) -> Self {
        Self::JsonParse {
            message: message.into(),
        }
    }

    pub fn fingerprint_format(fingerprint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FingerprintFormat {
            fingerprint: fingerprint.into(),
            reason: reason.into(),
        }
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
