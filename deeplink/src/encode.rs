// Copyright (c) 2024-2025 The OrbitX Developers

//! Redundant hand-off URL encoding.
//!
//! One wallet URL carries the payload several times over so that at
//! least one form survives the in-app browser:
//!
//! ```text
//! orbitxpay://walletscreen/<user-id>
//!     ?d=<base64 compact record>
//!     &evm=<record>&solana=<record>&tron=<record>
//!     &userId=<user-id>&uid=<user-id>
//! ```
//!
//! The compact parameter sits first so URL truncation claims it last.
//! Strategies are independent: one failing is logged and skipped, the
//! link ships with the remaining forms.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::warn;

use crate::{
    chain::ChainFamily,
    error::Error,
    message::WalletMessage,
    payload::HandoffPayload,
    query, STORAGE_KEY, WALLET_URL_ROOT,
};

/// Compact parameter key
pub const PARAM_COMPACT: &str = "d";
/// Long form of [PARAM_COMPACT], accepted on decode
pub const PARAM_COMPACT_LONG: &str = "data";
/// Plain user identifier key
pub const PARAM_USER_ID: &str = "userId";
/// Short user identifier key
pub const PARAM_USER_ID_SHORT: &str = "uid";

/// URL fragment contributed by one encoding strategy
enum Part {
    /// Extra path segment under the wallet host
    Segment(String),
    /// Query parameters to append
    Params(Vec<(String, String)>),
}

type Strategy = fn(&HandoffPayload) -> Result<Option<Part>, Error>;

/// Encoding strategies in URL layout order. Decode priority is the
/// receiver's concern, see [crate::decode].
const STRATEGIES: &[(&str, Strategy)] = &[
    ("path-segment", path_segment),
    ("compact", compact),
    ("chain-records", chain_records),
    ("plain-id", plain_id),
];

/// Base64 value for the compact parameter
pub fn compact_param(payload: &HandoffPayload) -> Result<String, Error> {
    let json = serde_json::to_string(&payload.compact_record())?;
    Ok(STANDARD.encode(json))
}

fn path_segment(p: &HandoffPayload) -> Result<Option<Part>, Error> {
    if p.user_id.is_empty() {
        return Ok(None);
    }
    Ok(Some(Part::Segment(query::encode_component(&p.user_id))))
}

fn compact(p: &HandoffPayload) -> Result<Option<Part>, Error> {
    let value = compact_param(p)?;
    Ok(Some(Part::Params(vec![(PARAM_COMPACT.to_string(), value)])))
}

fn chain_records(p: &HandoffPayload) -> Result<Option<Part>, Error> {
    let mut params = Vec::with_capacity(ChainFamily::ALL.len());
    for chain in ChainFamily::ALL {
        let record = serde_json::to_string(&p.chain_record(chain))?;
        params.push((chain.key().to_string(), record));
    }
    Ok(Some(Part::Params(params)))
}

fn plain_id(p: &HandoffPayload) -> Result<Option<Part>, Error> {
    Ok(Some(Part::Params(vec![
        (PARAM_USER_ID.to_string(), p.user_id.clone()),
        (PARAM_USER_ID_SHORT.to_string(), p.user_id.clone()),
    ])))
}

/// Build the wallet hand-off URL carrying every surviving encoding
pub fn wallet_url(payload: &HandoffPayload) -> String {
    let mut segment = None;
    let mut params = Vec::new();

    for (name, strategy) in STRATEGIES {
        match strategy(payload) {
            Ok(Some(Part::Segment(s))) => segment = Some(s),
            Ok(Some(Part::Params(p))) => params.extend(p),
            Ok(None) => (),
            Err(e) => warn!("{name} encoding skipped: {e}"),
        }
    }

    let mut url = String::from(WALLET_URL_ROOT);
    if let Some(seg) = segment {
        url.push('/');
        url.push_str(&seg);
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&query::build(&params));
    }

    url
}

/// One delivery channel's rendering of the payload
#[derive(Clone, Debug, PartialEq)]
pub enum Representation {
    /// In-process message for an attached shell
    Message(WalletMessage),
    /// Storage mirror for polling shells
    Storage {
        /// Well-known key, [crate::STORAGE_KEY]
        key: &'static str,
        /// Compact record as JSON text
        value: String,
    },
    /// Deep-link navigation, delivered after the others
    Navigation {
        /// Wallet hand-off URL
        url: String,
    },
}

/// Render the payload for every delivery channel, navigation last.
///
/// A representation that fails to serialize is skipped, its siblings
/// still ship.
pub fn representations(payload: &HandoffPayload) -> Vec<Representation> {
    let mut out = Vec::with_capacity(3);

    out.push(Representation::Message(WalletMessage::wallet_address(payload)));

    match serde_json::to_string(&payload.compact_record()) {
        Ok(value) => out.push(Representation::Storage {
            key: STORAGE_KEY,
            value,
        }),
        Err(e) => warn!("storage representation skipped: {e}"),
    }

    out.push(Representation::Navigation {
        url: wallet_url(payload),
    });

    out
}
