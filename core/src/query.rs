//! Query-string encoding for GET params.
//!
//! # Design
//! Params go through `serde_json::Value` so any `Serialize` type works, and
//! the `preserve_order` feature keeps struct field order in the output.
//! Only RFC 3986 unreserved characters stay unescaped, which renders a space
//! as `%20` rather than the form-style `+`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Flatten `params` into `k=v&k2=v2`.
///
/// `null` yields an empty string. Arrays repeat their key and nested objects
/// use bracketed keys (`filter[kind]=x`). Any top-level value other than an
/// object or `null` is rejected.
pub fn encode_query<T: Serialize + ?Sized>(params: &T) -> Result<String> {
    let value = serde_json::to_value(params).map_err(Error::Serialization)?;
    let map = match value {
        Value::Null => return Ok(String::new()),
        Value::Object(map) => map,
        other => {
            return Err(Error::Query(format!(
                "query params must serialize to an object, got {}",
                kind(&other)
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in &map {
        flatten(key, value, &mut pairs);
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", escape(k), escape(v)))
        .collect();
    Ok(encoded.join("&"))
}

fn flatten(key: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => out.push((key.to_string(), String::new())),
        Value::String(s) => out.push((key.to_string(), s.clone())),
        Value::Bool(_) | Value::Number(_) => out.push((key.to_string(), value.to_string())),
        Value::Array(items) => {
            for item in items {
                flatten(key, item, out);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                flatten(&format!("{key}[{child}]"), item, out);
            }
        }
    }
}

fn escape(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ENCODE_SET).to_string()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
