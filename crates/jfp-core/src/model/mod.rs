//! jfp data models.
//!
//! - [`Leaf`]: one path-addressed element produced by flattening a document.
//! - [`Siblings`]: the sibling annotation carried by a leaf.
//! - [`Fingerprint`]: the parsed form of `jfpv<version>$<hash>$<digest>`.
//!
//! Models are transient: they are built per request and dropped once the
//! fingerprint string exists. Hashing never serializes these types with serde;
//! leaves are converted to JSON with [`Leaf::to_json`] and then encoded by
//! `crate::determinism::canonical_json`.

use serde_json::{Map, Value};

mod fingerprint;

pub use fingerprint::Fingerprint;

/// Sibling annotation of a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Siblings {
    /// The leaf is not inside any array.
    Absent,
    /// Sorted-hash digest of every leaf of the enclosing array.
    Digest(String),
    /// Unreduced leaves of the enclosing array (debug flattening only).
    Raw(Vec<Leaf>),
}

impl Siblings {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// A flattened element: a scalar, null, or empty container at a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub path: String,
    pub siblings: Siblings,
    pub value: Value,
}

impl Leaf {
    pub fn new(path: impl Into<String>, siblings: Siblings, value: Value) -> Self {
        Self {
            path: path.into(),
            siblings,
            value,
        }
    }

    /// The JSON form that gets hashed: `{"path", "siblings"?, "value"}`.
    ///
    /// `siblings` is omitted entirely when absent.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("path".to_string(), Value::String(self.path.clone()));
        match &self.siblings {
            Siblings::Absent => {}
            Siblings::Digest(d) => {
                obj.insert("siblings".to_string(), Value::String(d.clone()));
            }
            Siblings::Raw(leaves) => {
                obj.insert(
                    "siblings".to_string(),
                    Value::Array(leaves.iter().map(Leaf::to_json).collect()),
                );
            }
        }
        obj.insert("value".to_string(), self.value.clone());
        Value::Object(obj)
    }
}
