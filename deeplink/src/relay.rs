// Copyright (c) 2024-2025 The OrbitX Developers

//! Redirect relay target handling.
//!
//! App-store review rejects wallet pages that deep-link straight out,
//! so the web app first navigates to a relay page carrying the real
//! target in a `url` parameter:
//!
//! ```text
//! https://wallet.orbitx.app/redirect?url=<escaped target>
//! ```
//!
//! Hosting routers decode that parameter zero, one or two times
//! before anyone reads it. [reconcile_target] undoes at most one
//! residual layer on top of the reader's own query parse, bounding
//! total decoding at [MAX_DECODE_PASSES]. The bound is a tuned
//! constant, not a URI law: a third pass corrupts targets whose
//! payload legitimately contains `%`.

use crate::{query, WALLET_URL_ROOT};

/// Relay page path
pub const RELAY_PATH: &str = "/redirect";
/// Target parameter key on the relay page
pub const PARAM_TARGET: &str = "url";
/// Marker every usable target must carry
pub const USER_ID_MARKER: &str = "userId=";
/// Total percent-decode passes applied to a relay target, query parse
/// included
pub const MAX_DECODE_PASSES: usize = 2;

/// Undo one residual encoding layer, if one is visibly present.
///
/// The caller's query parse already spent one pass; a target still
/// containing `%` after that was double-escaped at the sender.
pub fn reconcile_target(raw: &str) -> String {
    if raw.contains('%') {
        query::decode_component(raw)
    } else {
        raw.to_string()
    }
}

/// Whether a reconciled target is worth navigating to.
///
/// The bare wallet root means the sender lost the payload before the
/// relay; navigating would open the app with nothing to show.
pub fn target_valid(target: &str) -> bool {
    target != WALLET_URL_ROOT && target.contains(USER_ID_MARKER)
}

/// Whether a URL is a relay wrapper around a deep link
pub fn is_relay_url(url: &str) -> bool {
    url.contains("/redirect?url=")
}

/// Unwrap a relay URL observed by the native shell.
///
/// The shell sees the wrapper when the in-app browser surfaces the
/// relay page URL itself instead of the navigation it performs. Two
/// decode passes mirror the sender's escape plus the router's.
pub fn unwrap_native(url: &str) -> Option<String> {
    if !is_relay_url(url) {
        return None;
    }
    query::param(url, PARAM_TARGET).map(|once| query::decode_component(&once))
}
