//! jfp-core
//!
//! Order-independent fingerprints for JSON documents:
//! - canonical JSON encoding used as hash input
//! - sha256/sha384/sha512 hashing with hex output
//! - the jfpv1 sibling-aware flattening algorithm
//! - sorted-hash reduction
//! - decoding and matching of `jfpv<version>$<hash>$<digest>` strings
//!
//! ```
//! let a = jfp_core::create(r#"{"a":1,"b":2}"#, "sha256", 1).unwrap();
//! let b = jfp_core::create(r#"{"b":2,"a":1}"#, "sha256", 1).unwrap();
//! assert_eq!(a, b);
//! assert!(jfp_core::is_match(r#"{"b": 2, "a": 1}"#, &a).unwrap());
//! ```

pub mod algorithm;
pub mod config;
pub mod determinism;
pub mod errors;
pub mod model;
pub mod pipeline;
pub mod version;

pub use crate::errors::{JfpError, JfpResult};
pub use crate::pipeline::create::{create, create_from_bytes, create_with_config};
pub use crate::pipeline::decode::decode;
pub use crate::pipeline::matching::{find_matches, is_match};

/// Literal that starts every fingerprint, followed by the version number.
pub const FINGERPRINT_PREFIX: &str = "jfpv";

/// Separator between version, hash function and digest.
pub const FINGERPRINT_SEPARATOR: char = '$';

/// Convenience re-exports.
pub mod prelude {
    pub use crate::algorithm::v1::{flatten, flatten_debug};
    pub use crate::config::{validate_config, FingerprintConfig, LimitsConfig};
    pub use crate::determinism::canonical_json::{number_from_f64, to_canonical_bytes};
    pub use crate::determinism::hashing::{hash_bytes_hex, hash_canonical_json_hex, HashFunction};
    pub use crate::determinism::sorted_hash::{reduce, sorted_hash_list};
    pub use crate::model::{Fingerprint, Leaf, Siblings};
    pub use crate::pipeline::create::fingerprint_value;
    pub use crate::version::FingerprintVersion;
    pub use crate::{create, create_from_bytes, create_with_config, decode, find_matches, is_match};
    pub use crate::{JfpError, JfpResult};
}
