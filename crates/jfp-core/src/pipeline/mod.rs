//! Fingerprint pipeline: text → parsed value → algorithm → formatted string.
//!
//! The public operations of the crate live here:
//! - [`create`](create::create) and its byte/config variants
//! - [`decode`](decode::decode)
//! - [`is_match`](matching::is_match) and [`find_matches`](matching::find_matches)
//!
//! The core crate does not do network or filesystem I/O. Higher-level crates
//! read inputs and pass text or bytes in.

pub mod create;
pub mod decode;
pub mod matching;
pub mod parse;
