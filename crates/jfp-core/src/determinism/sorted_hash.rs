//! Sorted-hash reduction.
//!
//! Collapses a sequence of JSON elements into one digest that does not depend
//! on the order the elements were produced in:
//! 1. canonical-encode and hash each element
//! 2. sort the hex digests ascending
//! 3. canonical-encode the sorted digests as a JSON array of strings and hash it
//!
//! Digests of one hash function all have the same length, so plain string
//! ordering is a total order over them.

use serde_json::Value;

use crate::determinism::hashing::{hash_canonical_json_hex, HashFunction};
use crate::errors::JfpResult;

/// Hash each element and return the digests sorted ascending.
pub fn sorted_hash_list<'a, I>(items: I, alg: HashFunction) -> JfpResult<Vec<String>>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut hashes = items
        .into_iter()
        .map(|item| hash_canonical_json_hex(item, alg))
        .collect::<JfpResult<Vec<_>>>()?;
    hashes.sort_unstable();
    Ok(hashes)
}

/// Reduce elements into a single order-independent digest.
pub fn reduce<'a, I>(items: I, alg: HashFunction) -> JfpResult<String>
where
    I: IntoIterator<Item = &'a Value>,
{
    let sorted = sorted_hash_list(items, alg)?;
    let list = Value::Array(sorted.into_iter().map(Value::String).collect());
    hash_canonical_json_hex(&list, alg)
}
