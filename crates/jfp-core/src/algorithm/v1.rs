//! jfpv1: sibling-aware flattening with sorted-hash reduction.
//!
//! A document is flattened into [`Leaf`]s. Paths record how a leaf was reached:
//! `{key}` for an object field, `[N]` for an array of length N, joined by `|`.
//! Every leaf below an array carries a digest of *all* leaves produced by that
//! array's content (the nearest enclosing array wins). This makes identical
//! values in differently shaped arrays hash differently while keeping the
//! result independent of key and element order.
//!
//! Empty arrays and objects are leaves with their own value (`[]` / `{}`) so
//! that their presence is never lost.

use serde_json::Value;
use tracing::trace;

use crate::config::LimitsConfig;
use crate::determinism::hashing::HashFunction;
use crate::determinism::sorted_hash;
use crate::errors::{JfpError, JfpResult};
use crate::model::{Fingerprint, Leaf, Siblings};
use crate::version::FingerprintVersion;

const PATH_SEPARATOR: char = '|';

/// Flatten a value into leaves with reduced sibling digests.
pub fn flatten(value: &Value, alg: HashFunction, limits: &LimitsConfig) -> JfpResult<Vec<Leaf>> {
    Flattener::new(alg, false, limits).flatten(value, "", Siblings::Absent, 0)
}

/// Flatten a value keeping every sibling sequence unreduced.
///
/// Intended for inspection and tests; the output is not used for fingerprints.
pub fn flatten_debug(value: &Value, alg: HashFunction, limits: &LimitsConfig) -> JfpResult<Vec<Leaf>> {
    Flattener::new(alg, true, limits).flatten(value, "", Siblings::Absent, 0)
}

/// Reduce a leaf sequence into one digest.
pub fn reduce_leaves(leaves: &[Leaf], alg: HashFunction) -> JfpResult<String> {
    let values: Vec<Value> = leaves.iter().map(Leaf::to_json).collect();
    sorted_hash::reduce(&values, alg)
}

/// Compute the jfpv1 fingerprint of a parsed value.
pub fn compose(value: &Value, alg: HashFunction, limits: &LimitsConfig) -> JfpResult<Fingerprint> {
    let leaves = flatten(value, alg, limits)?;
    let digest = reduce_leaves(&leaves, alg)?;
    trace!(leaves = leaves.len(), hash_function = %alg, "jfpv1 digest computed");
    Ok(Fingerprint::new(FingerprintVersion::V1, alg, digest))
}

/// Join a path segment onto a base path.
pub fn build_path(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{base}{PATH_SEPARATOR}{segment}")
    }
}

struct Flattener {
    alg: HashFunction,
    debug: bool,
    max_depth: usize,
}

impl Flattener {
    fn new(alg: HashFunction, debug: bool, limits: &LimitsConfig) -> Self {
        Self {
            alg,
            debug,
            max_depth: limits.max_depth,
        }
    }

    fn flatten(&self, value: &Value, path: &str, siblings: Siblings, depth: usize) -> JfpResult<Vec<Leaf>> {
        if depth > self.max_depth {
            return Err(JfpError::DepthLimit {
                limit: self.max_depth,
            });
        }

        match value {
            Value::Object(map) if !map.is_empty() => {
                let mut out = Vec::new();
                for (key, item) in map {
                    let p = build_path(path, &format!("{{{key}}}"));
                    out.extend(self.flatten(item, &p, siblings.clone(), depth + 1)?);
                }
                Ok(out)
            }
            Value::Array(items) if !items.is_empty() => self.flatten_array(items, path, depth),
            _ => Ok(vec![Leaf::new(path, siblings, value.clone())]),
        }
    }

    fn flatten_array(&self, items: &[Value], path: &str, depth: usize) -> JfpResult<Vec<Leaf>> {
        let p = build_path(path, &format!("[{}]", items.len()));

        // First pass: the array's full content, without sibling context.
        let mut raw = Vec::new();
        for item in items {
            raw.extend(self.flatten(item, &p, Siblings::Absent, depth + 1)?);
        }

        let array_siblings = if self.debug {
            Siblings::Raw(raw.clone())
        } else {
            Siblings::Digest(reduce_leaves(&raw, self.alg)?)
        };

        // Second pass: the same walk with this array's siblings attached.
        // Walking an item again differs from the first pass only for leaves
        // that inherited `Absent`; leaves under a nested non-empty array keep
        // that array's annotation. Re-annotating the first-pass leaves yields
        // the identical sequence without revisiting nested arrays twice.
        Ok(raw
            .into_iter()
            .map(|mut leaf| {
                if leaf.siblings.is_absent() {
                    leaf.siblings = array_siblings.clone();
                }
                leaf
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn limits() -> LimitsConfig {
        LimitsConfig::default()
    }

    fn leaf(path: &str, siblings: Siblings, value: Value) -> Leaf {
        Leaf::new(path, siblings, value)
    }

    #[test]
    fn build_path_joins_with_pipe() {
        assert_eq!(build_path("", "{foo}"), "{foo}");
        assert_eq!(build_path("", "[5]"), "[5]");
        assert_eq!(build_path("[5]", "{foo}"), "[5]|{foo}");
    }

    #[test]
    fn special_characters_in_keys_are_kept_verbatim() {
        let v = json!([1, {"[1]|{foo}": "bar"}, 2]);
        let out = flatten(&v, HashFunction::Sha256, &limits()).unwrap();
        assert_eq!(out[0].path, "[3]");
        assert_eq!(out[1].path, "[3]|{[1]|{foo}}");
        assert_eq!(out[2].path, "[3]");
    }

    #[test]
    fn scalars_at_root_have_empty_path_and_no_siblings() {
        for v in [json!(123), json!(123.321), json!("alpha 123"), json!(true), json!(null)] {
            let out = flatten(&v, HashFunction::Sha256, &limits()).unwrap();
            assert_eq!(out, vec![leaf("", Siblings::Absent, v.clone())]);
        }
    }

    #[test]
    fn debug_mode_keeps_raw_siblings() {
        let v = json!([1, [2, 3]]);
        let out = flatten_debug(&v, HashFunction::Sha256, &limits()).unwrap();

        let inner_raw = vec![
            leaf("[2]|[2]", Siblings::Absent, json!(2)),
            leaf("[2]|[2]", Siblings::Absent, json!(3)),
        ];
        let inner = Siblings::Raw(inner_raw);
        let outer = Siblings::Raw(vec![
            leaf("[2]", Siblings::Absent, json!(1)),
            leaf("[2]|[2]", inner.clone(), json!(2)),
            leaf("[2]|[2]", inner.clone(), json!(3)),
        ]);

        assert_eq!(
            out,
            vec![
                leaf("[2]", outer, json!(1)),
                leaf("[2]|[2]", inner.clone(), json!(2)),
                leaf("[2]|[2]", inner, json!(3)),
            ]
        );
    }

    #[test]
    fn hashed_siblings_known_answer() {
        let v = json!([1, [2, 3]]);
        let out = flatten(&v, HashFunction::Sha256, &limits()).unwrap();
        let outer = Siblings::Digest(
            "8069db9df3023506cf98814821a28fc707a56177da54f5b4ab26c4d1d5eb3318".to_string(),
        );
        let inner = Siblings::Digest(
            "9abd47dcd5265fb0d2390d7fec046c2c2c6afdf4b3d12ebd3da34ba1c0442a24".to_string(),
        );
        assert_eq!(
            out,
            vec![
                leaf("[2]", outer, json!(1)),
                leaf("[2]|[2]", inner.clone(), json!(2)),
                leaf("[2]|[2]", inner, json!(3)),
            ]
        );
    }

    #[test]
    fn objects_propagate_array_siblings() {
        let v = json!([{"a": 1, "b": {"c": 2}}]);
        let out = flatten(&v, HashFunction::Sha256, &limits()).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].path, "[1]|{a}");
        assert_eq!(out[1].path, "[1]|{b}|{c}");
        assert!(matches!(out[0].siblings, Siblings::Digest(_)));
        assert_eq!(out[0].siblings, out[1].siblings);
    }

    #[test]
    fn empty_containers_are_leaves() {
        let v = json!({"a": [], "b": {}, "c": [[], {}]});
        let out = flatten(&v, HashFunction::Sha256, &limits()).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], leaf("{a}", Siblings::Absent, json!([])));
        assert_eq!(out[1], leaf("{b}", Siblings::Absent, json!({})));
        assert_eq!(out[2].path, "{c}|[2]");
        assert_eq!(out[2].value, json!([]));
        assert_eq!(out[3].value, json!({}));
        assert_eq!(out[2].siblings, out[3].siblings);

        let out = flatten(&json!([[], {}]), HashFunction::Sha256, &limits()).unwrap();
        let siblings = Siblings::Digest(
            "ed604f28a65529f8ca8a33a0d08d76ac672c594f1fb5a0584c3afeb498a05642".to_string(),
        );
        assert_eq!(
            out,
            vec![
                leaf("[2]", siblings.clone(), json!([])),
                leaf("[2]", siblings, json!({})),
            ]
        );
    }

    #[test]
    fn second_pass_matches_full_rewalk() {
        // Deep nesting mixes inherited and nested-array annotations.
        let v = json!([[1, {"k": [2, [3]]}], {"x": [4]}, 5]);
        let fast = flatten_debug(&v, HashFunction::Sha256, &limits()).unwrap();

        fn rewalk(v: &Value, path: &str, siblings: &Siblings) -> Vec<Leaf> {
            match v {
                Value::Object(m) if !m.is_empty() => m
                    .iter()
                    .flat_map(|(k, item)| rewalk(item, &build_path(path, &format!("{{{k}}}")), siblings))
                    .collect(),
                Value::Array(a) if !a.is_empty() => {
                    let p = build_path(path, &format!("[{}]", a.len()));
                    let raw: Vec<Leaf> = a.iter().flat_map(|i| rewalk(i, &p, &Siblings::Absent)).collect();
                    let s = Siblings::Raw(raw);
                    a.iter().flat_map(|i| rewalk(i, &p, &s)).collect()
                }
                _ => vec![Leaf::new(path, siblings.clone(), v.clone())],
            }
        }

        assert_eq!(fast, rewalk(&v, "", &Siblings::Absent));
    }

    #[test]
    fn depth_limit_enforced() {
        let mut v = json!(1);
        for _ in 0..10 {
            v = json!([v]);
        }
        let tight = LimitsConfig {
            max_depth: 5,
            ..LimitsConfig::default()
        };
        let e = flatten(&v, HashFunction::Sha256, &tight).unwrap_err();
        assert_eq!(e, JfpError::DepthLimit { limit: 5 });

        let roomy = LimitsConfig {
            max_depth: 10,
            ..LimitsConfig::default()
        };
        assert_eq!(flatten(&v, HashFunction::Sha256, &roomy).unwrap().len(), 1);
    }

    #[test]
    fn compose_formats_v1() {
        let fp = compose(&json!({"foo": "bar"}), HashFunction::Sha256, &limits()).unwrap();
        assert_eq!(
            fp.to_string(),
            "jfpv1$sha256$d119f4d8b802091520162b78f57a995a9ecbc88b20573b0c7e474072b1710d9f"
        );
    }
}
