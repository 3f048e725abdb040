// Copyright (c) 2024-2025 The OrbitX Developers

//! In-app browser damage simulation.
//!
//! Helpers mangle hand-off URLs the way hostile in-app browsers do,
//! so decoder fallbacks can be exercised one at a time.

use orbitx_bridge_deeplink::query;

/// Drop query parameters by key
pub fn drop_params(url: &str, keys: &[&str]) -> String {
    let Some((base, raw)) = url.split_once('?') else {
        return url.to_string();
    };

    let kept: Vec<&str> = raw
        .split('&')
        .filter(|p| {
            let key = p.split_once('=').map(|(k, _)| k).unwrap_or(p);
            !keys.contains(&key)
        })
        .collect();

    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", kept.join("&"))
    }
}

/// Drop the whole query string
pub fn drop_query(url: &str) -> String {
    match url.split_once('?') {
        Some((base, _)) => base.to_string(),
        None => url.to_string(),
    }
}

/// Truncate to at most `max` characters
pub fn truncate(url: &str, max: usize) -> String {
    url.chars().take(max).collect()
}

/// Replace `+` with spaces, as form-decoding proxies do
pub fn plus_to_space(url: &str) -> String {
    url.replace('+', " ")
}

/// Percent-encode the URL once more, as shells re-wrapping a link do
pub fn reencode(url: &str) -> String {
    query::encode_component(url)
}

/// Percent-decode the URL once, as shells that normalize links before
/// dispatch do
pub fn predecode(url: &str) -> String {
    query::decode_component(url)
}
