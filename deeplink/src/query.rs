// Copyright (c) 2024-2025 The OrbitX Developers

//! Tolerant query-string handling.
//!
//! Deep links coming back through in-app browsers are routinely
//! mangled: values re-encoded, pairs dropped, `+` left literal.
//! Parsing here never rejects, it recovers what it can. The escape
//! set matches the browser `encodeURIComponent` function so encoded
//! links survive a round trip through web routers unchanged.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// `encodeURIComponent` escape set: alphanumerics and `-_.!~*'()`
/// pass through unescaped
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-escape a single URL component
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Undo one percent-encoding pass.
///
/// `+` stays literal, and input that does not decode to text comes
/// back unchanged rather than failing.
pub fn decode_component(s: &str) -> String {
    match percent_decode_str(s).decode_utf8() {
        Ok(v) => v.into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Split everything after the first `?` into decoded key/value pairs.
///
/// Pairs keep their order and duplicate keys are kept. Keys are taken
/// as-is, values get one decode pass. Pairs without `=` become empty
/// values.
pub fn parse(url: &str) -> Vec<(String, String)> {
    let Some((_, tail)) = url.split_once('?') else {
        return Vec::new();
    };

    tail.split('&')
        .filter(|p| !p.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), decode_component(v)),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Value for `key` in parsed pairs, last occurrence wins
pub fn get<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Extract one parameter straight from a URL.
///
/// Scans for `?key=` or `&key=` wherever it appears, so values are
/// still found on URLs mangled past regular parsing. First occurrence
/// wins, one decode pass applied.
pub fn param(url: &str, key: &str) -> Option<String> {
    let needle = format!("{key}=");
    let bytes = url.as_bytes();

    let mut start = 0;
    while let Some(rel) = url[start..].find(&needle) {
        let idx = start + rel;
        if idx > 0 && matches!(bytes[idx - 1], b'?' | b'&') {
            let value = &url[idx + needle.len()..];
            let end = value.find('&').unwrap_or(value.len());
            return Some(decode_component(&value[..end]));
        }
        start = idx + needle.len();
    }

    None
}

/// Assemble a query string, values escaped, keys emitted as given
pub fn build(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}
