// Copyright (c) 2024-2025 The OrbitX Developers

//! Fire-and-forget payload delivery.
//!
//! Channels are independent: a failing channel is logged and skipped,
//! never surfaced to the caller, and never aborts its siblings. The
//! navigation channel always goes last because a successful deep link
//! can tear the page down mid-delivery.

use log::{debug, warn};

use orbitx_bridge_deeplink::encode::Representation;

use crate::host::Host;

/// Deliver every representation over its channel, navigation last
pub fn send<H: Host>(host: &H, representations: &[Representation]) {
    let (nav, rest): (Vec<_>, Vec<_>) = representations
        .iter()
        .partition(|r| matches!(r, Representation::Navigation { .. }));

    for rep in rest.into_iter().chain(nav) {
        deliver(host, rep);
    }
}

fn deliver<H: Host>(host: &H, rep: &Representation) {
    let res = match rep {
        Representation::Message(msg) => {
            if !host.message_channel_available() {
                debug!("message channel absent, skipped");
                return;
            }
            host.post_message(msg).map(|()| "message")
        }
        Representation::Storage { key, value } => host.storage_put(key, value).map(|()| "storage"),
        Representation::Navigation { url } => host.navigate(url).map(|()| "navigation"),
    };

    match res {
        Ok(channel) => debug!("{channel} delivered"),
        Err(e) => warn!("channel delivery failed: {e}"),
    }
}
