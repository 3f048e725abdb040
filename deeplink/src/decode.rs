// Copyright (c) 2024-2025 The OrbitX Developers

//! Fallback decoding of wallet hand-off URLs.
//!
//! Recovery strategies run in fixed priority order; the first hit
//! wins for the user identifier while wallet references merge across
//! surviving forms:
//!
//! 1. compact base64 parameter (`d`, then `data`)
//! 2. per-chain record parameters (`evm`, `solana`, `tron`)
//! 3. plain `userId` parameter
//! 4. short `uid` parameter
//! 5. path segment after the wallet host
//!
//! Inputs are hostile: anything may be missing, re-encoded or
//! truncated. A bad URL is never an error here, the decoder reports
//! whatever survived and the caller decides what absence means.

use base64::{
    engine::general_purpose::{STANDARD, STANDARD_NO_PAD},
    Engine as _,
};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use strum::Display;

use crate::{
    chain::ChainFamily,
    encode::{PARAM_COMPACT, PARAM_COMPACT_LONG, PARAM_USER_ID, PARAM_USER_ID_SHORT},
    error::Error,
    payload::{parse_chain_record, parse_compact_record, CompactFields, WalletRef},
    query, relay, WALLET_URL_ROOT,
};

/// Strategy that produced the recovered user identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Display)]
pub enum UserIdSource {
    /// Compact base64 parameter
    Compact,
    /// Embedded in a per-chain record
    ChainRecord,
    /// Plain `userId` parameter
    UserIdParam,
    /// Short `uid` parameter
    UidParam,
    /// Path segment
    PathSegment,
}

/// Everything recovered from one hand-off URL
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedPayload {
    /// Recovered user identifier
    pub user_id: Option<String>,
    /// Strategy that produced `user_id`
    pub user_id_source: Option<UserIdSource>,
    /// EVM wallet reference
    pub evm: Option<WalletRef>,
    /// Solana wallet reference
    pub solana: Option<WalletRef>,
    /// Tron wallet reference
    pub tron: Option<WalletRef>,
    /// Encode timestamp, recovered from the compact record only
    pub timestamp_ms: Option<u64>,
}

impl DecodedPayload {
    /// Wallet reference for a chain family
    pub fn wallet(&self, chain: ChainFamily) -> Option<&WalletRef> {
        match chain {
            ChainFamily::Evm => self.evm.as_ref(),
            ChainFamily::Solana => self.solana.as_ref(),
            ChainFamily::Tron => self.tron.as_ref(),
        }
    }

    /// User identifier, or [Error::MissingUserId] when no strategy
    /// recovered one
    pub fn require_user_id(&self) -> Result<&str, Error> {
        self.user_id.as_deref().ok_or(Error::MissingUserId)
    }
}

/// Decode a wallet hand-off URL, unwrapping a relay wrapper first
pub fn decode_url(url: &str) -> DecodedPayload {
    let unwrapped = relay::unwrap_native(url);
    let url = unwrapped.as_deref().unwrap_or(url);

    let params = query::parse(url);
    let mut out = DecodedPayload::default();

    // 1: compact parameter, short key first
    for key in [PARAM_COMPACT, PARAM_COMPACT_LONG] {
        let Some(value) = query::get(&params, key) else {
            continue;
        };
        match decode_compact(value) {
            Ok(fields) => {
                apply_compact(&mut out, fields);
                break;
            }
            Err(e) => debug!("`{key}` parameter unusable: {e}"),
        }
    }

    // 2: per-chain records, which also backfill wallet references the
    // compact form lost
    for chain in ChainFamily::ALL {
        let Some(raw) = query::get(&params, chain.key()) else {
            continue;
        };
        let Some((wallet, embedded)) = chain_record_from_param(chain, raw) else {
            continue;
        };

        let slot = match chain {
            ChainFamily::Evm => &mut out.evm,
            ChainFamily::Solana => &mut out.solana,
            ChainFamily::Tron => &mut out.tron,
        };
        if slot.is_none() {
            *slot = Some(wallet);
        }

        if out.user_id.is_none() {
            if let Some(id) = embedded {
                out.user_id = Some(id);
                out.user_id_source = Some(UserIdSource::ChainRecord);
            }
        }
    }

    // 3, 4: plain identifier parameters
    for (key, source) in [
        (PARAM_USER_ID, UserIdSource::UserIdParam),
        (PARAM_USER_ID_SHORT, UserIdSource::UidParam),
    ] {
        if out.user_id.is_some() {
            break;
        }
        if let Some(v) = query::get(&params, key).filter(|v| !v.is_empty()) {
            out.user_id = Some(v.to_string());
            out.user_id_source = Some(source);
        }
    }

    // 5: path segment
    if out.user_id.is_none() {
        if let Some(seg) = path_segment(url) {
            out.user_id = Some(seg);
            out.user_id_source = Some(UserIdSource::PathSegment);
        }
    }

    out
}

/// Decode the compact parameter: base64, then JSON.
///
/// Two repairs cover observed transit damage: `+` arriving as a space
/// after form-decoding, and stripped `=` padding.
pub fn decode_compact(value: &str) -> Result<CompactFields, Error> {
    let bytes = decode_b64(value)?;

    let text = match String::from_utf8(bytes) {
        Ok(t) => t,
        // historical senders emitted latin-1, map bytes through as-is
        Err(e) => e.into_bytes().iter().map(|b| *b as char).collect(),
    };

    let v: Value = serde_json::from_str(&text)?;
    Ok(parse_compact_record(&v))
}

fn decode_b64(value: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(value).or_else(|e| {
        let repaired = value.replace(' ', "+");
        STANDARD
            .decode(&repaired)
            .or_else(|_| STANDARD_NO_PAD.decode(repaired.trim_end_matches('=')))
            .map_err(|_| e)
    })
}

/// Parse one per-chain parameter value, retrying with another decode
/// pass when the value still looks escaped
fn chain_record_from_param(chain: ChainFamily, raw: &str) -> Option<(WalletRef, Option<String>)> {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) if raw.contains('%') => serde_json::from_str(&query::decode_component(raw)).ok()?,
        Err(_) => return None,
    };
    parse_chain_record(chain, &parsed)
}

/// User identifier from the path: the segment straight after the
/// wallet host
fn path_segment(url: &str) -> Option<String> {
    let rest = url.strip_prefix(WALLET_URL_ROOT)?.strip_prefix('/')?;
    let end = rest.find(|c| c == '/' || c == '?').unwrap_or(rest.len());
    let seg = &rest[..end];

    if seg.is_empty() {
        return None;
    }
    Some(query::decode_component(seg))
}

fn apply_compact(out: &mut DecodedPayload, fields: CompactFields) {
    if let Some(id) = fields.user_id {
        out.user_id = Some(id);
        out.user_id_source = Some(UserIdSource::Compact);
    }
    out.evm = fields.evm;
    out.solana = fields.solana;
    out.tron = fields.tron;
    out.timestamp_ms = fields.timestamp_ms;
}
