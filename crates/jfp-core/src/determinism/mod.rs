//! Determinism primitives: canonical encoding, hashing, sorted-hash reduction.
//!
//! Everything in here is a pure function of its arguments.

pub mod canonical_json;
pub mod hashing;
pub mod sorted_hash;
