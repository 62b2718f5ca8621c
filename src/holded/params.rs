// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Normalisation of loosely typed request payloads before they reach Holded

use serde_json::{Map, Number, Value};

/// Field name to primitive value, as received from callers.
pub type Payload = Map<String, Value>;

/// A value counts as empty when it is `null` or the empty string.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Drop every entry whose value is empty. Applying it twice changes nothing.
pub fn prune_empty(payload: Payload) -> Payload {
    payload.into_iter().filter(|(_, v)| !is_empty(v)).collect()
}

/// Text form of a primitive value as it appears in a query string.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pruned payload rendered as query string pairs, in insertion order.
pub fn query_pairs(filters: &Payload) -> Vec<(String, String)> {
    filters
        .iter()
        .filter(|(_, v)| !is_empty(v))
        .map(|(k, v)| (k.clone(), as_text(v)))
        .collect()
}

/// Numbers pass through; numeric strings are parsed, integral ones (`"3600"`,
/// `"1e3"`, `"60.0"`) to an integer so they serialize without a fraction.
pub fn coerce_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Some(Number::from(i));
            }
            let f = s.parse::<f64>().ok()?;
            // 2^63: every f64 below it in magnitude fits an i64
            if f.fract() == 0.0 && f.abs() < 9_223_372_036_854_775_808.0 {
                return Some(Number::from(f as i64));
            }
            Number::from_f64(f)
        }
        _ => None,
    }
}

/// Identifier-like field: a non-empty string, or a number rendered as text.
pub fn required_text(payload: &Payload, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
