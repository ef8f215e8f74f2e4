//! Canonical JSON encoding.
//!
//! The canonical form is the only byte representation ever fed to a hash
//! function. `serde_json::to_vec` is not used for this because its number and
//! spacing choices are not part of any stable contract.
//!
//! Rules:
//! - object keys sorted by code point, no duplicates
//! - separators `,` and `:` with no whitespace
//! - non-ASCII text emitted as raw UTF-8
//! - `"` `\` and control characters escaped (`\b \f \n \r \t`, else `\u00xx`)
//! - integer literals as their exact digits, `-0` written as `0`
//! - floats in shortest round-trip digits, "repr" layout (see [`format_float`])
//! - NaN and infinities rejected

use std::fmt::Write as _;

use serde_json::{Map, Number, Value};

use crate::errors::{JfpError, JfpResult};

/// Decimal exponents in `[-4, 16)` are written in fixed notation.
const FIXED_NOTATION_MIN_DECPT: i32 = -4;
const FIXED_NOTATION_MAX_DECPT: i32 = 16;

/// Encode a value into canonical JSON bytes.
pub fn to_canonical_bytes(value: &Value) -> JfpResult<Vec<u8>> {
    Ok(to_canonical_string(value)?.into_bytes())
}

/// Encode a value into a canonical JSON string.
pub fn to_canonical_string(value: &Value) -> JfpResult<String> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

/// Build a JSON number from a float, rejecting NaN and infinities.
pub fn number_from_f64(f: f64) -> JfpResult<Value> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| JfpError::encoding(format!("non-finite number {f} is not valid JSON")))
}

fn write_value(out: &mut String, value: &Value) -> JfpResult<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, n)?,
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => write_object(out, map)?,
    }
    Ok(())
}

fn write_object(out: &mut String, map: &Map<String, Value>) -> JfpResult<()> {
    // Map iteration order depends on serde_json features; sort explicitly.
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    out.push('{');
    for (i, (k, v)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(out, k);
        out.push(':');
        write_value(out, v)?;
    }
    out.push('}');
    Ok(())
}

fn write_number(out: &mut String, n: &Number) -> JfpResult<()> {
    // Numbers keep their source literal; integers are never routed through f64.
    let literal = n.to_string();
    if is_integer_literal(&literal) {
        out.push_str(normalize_integer(&literal));
        return Ok(());
    }

    let f = n
        .as_f64()
        .ok_or_else(|| JfpError::encoding(format!("unrepresentable number {literal}")))?;
    out.push_str(&format_float(f)?);
    Ok(())
}

fn is_integer_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `-0` is written as `0`.
fn normalize_integer(literal: &str) -> &str {
    match literal.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0') => "0",
        _ => literal,
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Render a finite float using shortest round-trip digits.
///
/// With `decpt` the position of the decimal point relative to the significant
/// digits (`0.d1d2.. x 10^decpt`), fixed notation is used when
/// `-4 < decpt <= 16` and always keeps a fractional part (`1.0`). Otherwise the
/// exponent form is used with an explicit sign and at least two exponent
/// digits (`1e+16`, `1.5e-07`).
pub fn format_float(f: f64) -> JfpResult<String> {
    if !f.is_finite() {
        return Err(JfpError::encoding(format!(
            "non-finite number {f} is not valid JSON"
        )));
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "-1.2345e-7".
    let sci = format!("{f:e}");
    let (mantissa, exp) = sci
        .split_once('e')
        .ok_or_else(|| JfpError::encoding(format!("unexpected float layout {sci}")))?;
    let exp: i32 = exp
        .parse()
        .map_err(|_| JfpError::encoding(format!("unexpected float exponent in {sci}")))?;

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let decpt = exp + 1;

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if decpt > FIXED_NOTATION_MIN_DECPT && decpt <= FIXED_NOTATION_MAX_DECPT {
        if decpt <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take(decpt.unsigned_abs() as usize));
            out.push_str(&digits);
        } else {
            let decpt = decpt as usize;
            if decpt >= digits.len() {
                out.push_str(&digits);
                out.extend(std::iter::repeat('0').take(decpt - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..decpt]);
                out.push('.');
                out.push_str(&digits[decpt..]);
            }
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        let _ = write!(out, "e{sign}{:02}", exp.unsigned_abs());
    }

    Ok(out)
}
