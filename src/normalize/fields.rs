//! Lenient field accessors for raw catalog rows.
//!
//! The catalog returns some numeric columns as strings, so numeric readers
//! accept either representation. Anything unusable reads as `None`.

use crate::types::RawRecord;
use serde_json::Value;

pub fn text(record: &RawRecord, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn integer(record: &RawRecord, key: &str) -> Option<i64> {
    match record.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_f64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `f` as an integer only when the conversion is exact.
fn whole_f64(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

pub fn float(record: &RawRecord, key: &str) -> Option<f64> {
    match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Comma-join the non-empty address parts, in the order given.
pub fn address(record: &RawRecord, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| text(record, k))
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
