//! Parsing helpers for fingerprint inputs.
//!
//! Core crate avoids filesystem/network I/O. Parsing helpers in this module operate on
//! in-memory text or bytes handed over by the caller.
//!
//! This module provides:
//! - text validation (bytes must be UTF-8)
//! - strict JSON parsing with size and nesting limits
//! - error messages with the parser's line/column for CLI consumers
//!
//! Malformed input is never repaired. Any JSON kind is accepted at the root,
//! including bare scalars.

use serde::Deserialize;
use serde_json::Value;

use crate::config::LimitsConfig;
use crate::errors::{JfpError, JfpResult};

/// Check that raw bytes are text and return them as `&str`.
pub fn require_text(bytes: &[u8]) -> JfpResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        JfpError::input_type(format!(
            "{} bytes that are not valid UTF-8 ({e})",
            bytes.len()
        ))
    })
}

/// Parse JSON text into a `serde_json::Value` with hard size and depth limits.
///
/// The nesting bound is `limits.max_depth`, not serde_json's fixed recursion
/// limit; the flattener applies the exact depth check afterwards.
pub fn parse_json_str(text: &str, limits: &LimitsConfig) -> JfpResult<Value> {
    if text.len() > limits.max_input_bytes {
        return Err(JfpError::InputTooLarge {
            actual: text.len(),
            limit: limits.max_input_bytes,
        });
    }
    if nesting_depth(text) > limits.max_depth.saturating_add(1) {
        return Err(JfpError::DepthLimit {
            limit: limits.max_depth,
        });
    }

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).map_err(|e| JfpError::json_parse(e.to_string()))?;
    de.end().map_err(|e| JfpError::json_parse(e.to_string()))?;
    Ok(value)
}

/// Deepest bracket nesting in `text`, ignoring brackets inside strings.
fn nesting_depth(text: &str) -> usize {
    let (mut depth, mut max) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

/// Parse JSON bytes; non-UTF-8 input is an input type error.
pub fn parse_json_bytes(bytes: &[u8], limits: &LimitsConfig) -> JfpResult<Value> {
    parse_json_str(require_text(bytes)?, limits)
}
