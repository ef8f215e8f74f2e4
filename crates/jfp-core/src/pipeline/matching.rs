//! Matching raw JSON input against fingerprints.
//!
//! The input is fingerprinted with exactly the parameters (version, hash
//! function) found in the targets and compared by string equality.

use itertools::Itertools;
use serde_json::Value;
use tracing::debug;

use crate::config::FingerprintConfig;
use crate::errors::JfpResult;
use crate::model::Fingerprint;
use crate::pipeline::create::{create, fingerprint_value};
use crate::pipeline::parse::parse_json_str;

/// Match JSON input against one target fingerprint.
///
/// Returns `Ok(false)` on a mismatch; errors only for a malformed target or
/// malformed input.
pub fn is_match(input: &str, target_fingerprint: &str) -> JfpResult<bool> {
    let target = Fingerprint::parse(target_fingerprint)?;
    let computed = create(
        input,
        target.hash_function.as_str(),
        target.version.as_u32(),
    )?;
    Ok(computed == target_fingerprint)
}

/// Return every entry of `fingerprints` that matches the input.
///
/// With `deduplicate`, repeated entries are collapsed first (first occurrence
/// kept, order preserved). Without it, each matching occurrence is returned.
/// All entries are decoded before the input is parsed, so one malformed entry
/// fails the whole call.
pub fn find_matches<S: AsRef<str>>(
    input: &str,
    fingerprints: &[S],
    deduplicate: bool,
) -> JfpResult<Vec<String>> {
    let candidates: Vec<&str> = if deduplicate {
        fingerprints.iter().map(AsRef::as_ref).unique().collect()
    } else {
        fingerprints.iter().map(AsRef::as_ref).collect()
    };

    let targets = target_configs(&candidates)?;
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    let value = parse_json_str(input, &targets[0].limits)?;
    let computed = input_fingerprints(&value, &targets)?;

    let matches: Vec<String> = candidates
        .into_iter()
        .filter(|fp| computed.iter().any(|c| c == fp))
        .map(str::to_owned)
        .collect();
    debug!(
        candidates = fingerprints.len(),
        variants = targets.len(),
        matches = matches.len(),
        "fingerprint list matched"
    );
    Ok(matches)
}

/// Distinct (version, hash function) pairs, in first-seen order.
fn target_configs(fingerprints: &[&str]) -> JfpResult<Vec<FingerprintConfig>> {
    let decoded = fingerprints
        .iter()
        .map(|fp| Fingerprint::parse(fp))
        .collect::<JfpResult<Vec<_>>>()?;

    Ok(decoded
        .into_iter()
        .map(|fp| (fp.version, fp.hash_function))
        .unique()
        .map(|(version, hash_function)| FingerprintConfig {
            hash_function,
            version,
            ..FingerprintConfig::default()
        })
        .collect())
}

#[cfg(not(feature = "parallel"))]
fn input_fingerprints(value: &Value, targets: &[FingerprintConfig]) -> JfpResult<Vec<String>> {
    targets
        .iter()
        .map(|cfg| fingerprint_value(value, cfg).map(|fp| fp.to_string()))
        .collect()
}

#[cfg(feature = "parallel")]
fn input_fingerprints(value: &Value, targets: &[FingerprintConfig]) -> JfpResult<Vec<String>> {
    use rayon::prelude::*;

    targets
        .par_iter()
        .map(|cfg| fingerprint_value(value, cfg).map(|fp| fp.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::determinism::hashing::HashFunction;
    use crate::errors::JfpError;
    use assert_matches::assert_matches;

    const INPUT: &str = r#"{"foo": "bar"}"#;

    fn fp(input: &str, alg: HashFunction) -> String {
        create(input, alg.as_str(), 1).unwrap()
    }

    #[test]
    fn match_all_v1_variants() {
        for alg in HashFunction::ALL {
            assert!(is_match(INPUT, &fp(INPUT, alg)).unwrap());
        }
        let target = fp(INPUT, HashFunction::Sha256);
        assert!(!is_match(r#""{\"bar\": \"foo\"}""#, &target).unwrap());
        assert!(is_match(r#"{ "foo" : "bar" }"#, &target).unwrap());
    }

    #[test]
    fn match_errors() {
        let target = fp(INPUT, HashFunction::Sha256);
        assert_matches!(
            is_match(r#"{"invalid": json string}"#, &target),
            Err(JfpError::JsonParse { .. })
        );
        assert_matches!(
            is_match(INPUT, "invalid fingerprint string"),
            Err(JfpError::FingerprintFormat { .. })
        );
    }

    #[test]
    fn target_configs_are_distinct() {
        let sha256 = fp(INPUT, HashFunction::Sha256);
        let sha384 = fp(INPUT, HashFunction::Sha384);
        let sha512 = fp(INPUT, HashFunction::Sha512);
        let list = [&sha256, &sha256, &sha384, &sha512, &sha512].map(String::as_str);

        let targets = target_configs(&list).unwrap();
        let algs: Vec<HashFunction> = targets.iter().map(|c| c.hash_function).collect();
        assert_eq!(algs, HashFunction::ALL.to_vec());
    }

    #[test]
    fn find_matches_counts_and_dedup() {
        let sha256 = fp(INPUT, HashFunction::Sha256);
        let sha384 = fp(INPUT, HashFunction::Sha384);
        let sha512 = fp(INPUT, HashFunction::Sha512);
        let chaff = fp(r#"{"bar": "foo"}"#, HashFunction::Sha256);

        let list = vec![
            sha256.clone(),
            sha256.clone(),
            sha384.clone(),
            sha512.clone(),
            sha512.clone(),
            chaff,
        ];

        let matches = find_matches(INPUT, &list, false).unwrap();
        assert_eq!(matches.len(), 5);

        let deduplicated = find_matches(INPUT, &list, true).unwrap();
        assert_eq!(deduplicated, vec![sha256, sha384, sha512]);
    }

    #[test]
    fn find_matches_errors() {
        let sha256 = fp(INPUT, HashFunction::Sha256);
        assert_matches!(
            find_matches(r#"{"invalid": json string}"#, &[sha256.as_str()], false),
            Err(JfpError::JsonParse { .. })
        );
        assert_matches!(
            find_matches(INPUT, &[sha256.as_str(), "invalid fingerprint string"], false),
            Err(JfpError::FingerprintFormat { .. })
        );
    }

    #[test]
    fn empty_list_matches_nothing() {
        let empty: [&str; 0] = [];
        assert!(find_matches("not even json", &empty, false).unwrap().is_empty());
    }
}
