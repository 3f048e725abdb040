// Copyright (c) 2024-2025 The OrbitX Developers

//! Browser authentication session plumbing.
//!
//! The native app opens the hosted wallet page in an in-app browser
//! and waits for a redirect into the app scheme. This module builds
//! the outbound request and interprets what comes back; the heavy
//! lifting of URL recovery lives in [orbitx_bridge_deeplink::decode].

use serde::{Deserialize, Serialize};

use orbitx_bridge_deeplink::{
    decode::{decode_url, DecodedPayload},
    WALLET_URL_ROOT,
};

/// Hosted wallet page configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Wallet page origin, e.g. `https://wallet.orbitx.app`
    pub base_url: String,
}

impl SessionConfig {
    /// Create a config over a wallet page origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL opening the wallet flow.
    ///
    /// `has_wallet` tells the page to skip provider signup for
    /// returning users; the parameter name is a wire constant shared
    /// with the page.
    pub fn wallet_flow_url(&self, has_wallet: bool) -> String {
        if has_wallet {
            format!("{}/createWallet", self.base_url)
        } else {
            format!("{}/createWallet?hasPrivyWallet=false", self.base_url)
        }
    }

    /// Outbound in-app browser request for the wallet flow
    pub fn auth_request(&self, has_wallet: bool) -> AuthRequest {
        AuthRequest {
            url: self.wallet_flow_url(has_wallet),
            redirect_prefix: WALLET_URL_ROOT.to_string(),
        }
    }
}

/// In-app browser session request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    /// Page to open
    pub url: String,
    /// Scheme prefix whose interception completes the session
    pub redirect_prefix: String,
}

/// In-app browser session outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Browser redirected into the app scheme
    Redirect(String),
    /// User closed the browser without completing
    Dismissed,
}

/// Decode a session outcome. `None` means the user backed out, an
/// empty [DecodedPayload] means the redirect lost its payload.
pub fn interpret(outcome: &AuthOutcome) -> Option<DecodedPayload> {
    match outcome {
        AuthOutcome::Redirect(url) => Some(decode_url(url)),
        AuthOutcome::Dismissed => None,
    }
}
