// Copyright (c) 2024-2025 The OrbitX Developers

//! Wallet hand-off payload types and wire record shapes.
//!
//! Two JSON record forms appear on the wire. One per-chain record per
//! query parameter, identifier embedded in each:
//!
//! ```text
//! {"evmWalletId":"..","evmWalletAddress":"0x..","userId":".."}
//! ```
//!
//! And one compact record carried base64-encoded in a single short
//! parameter:
//!
//! ```text
//! {"userId":"..","evm":{..},"solana":{..},"tron":{..},"timestamp":1712..}
//! ```
//!
//! Parsing accepts the prefixed field names plus the plain `address`
//! / `walletId` / `id` names emitted by earlier app versions.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::chain::ChainFamily;

/// Provider wallet reference for one chain family
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRef {
    /// Provider-side wallet identifier, empty when unresolved
    pub wallet_id: String,
    /// On-chain address, empty when no wallet exists
    pub address: String,
}

impl WalletRef {
    /// Create a wallet reference
    pub fn new(wallet_id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            address: address.into(),
        }
    }

    /// Whether an address was provisioned
    pub fn exists(&self) -> bool {
        !self.address.is_empty()
    }
}

/// Wallet references for every bridged chain family
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WalletSet {
    /// EVM wallet
    pub evm: WalletRef,
    /// Solana wallet
    pub solana: WalletRef,
    /// Tron wallet, commonly absent
    pub tron: WalletRef,
}

impl WalletSet {
    /// Wallet reference for a chain family
    pub fn get(&self, chain: ChainFamily) -> &WalletRef {
        match chain {
            ChainFamily::Evm => &self.evm,
            ChainFamily::Solana => &self.solana,
            ChainFamily::Tron => &self.tron,
        }
    }

    /// Mutable wallet reference for a chain family
    pub fn get_mut(&mut self, chain: ChainFamily) -> &mut WalletRef {
        match chain {
            ChainFamily::Evm => &mut self.evm,
            ChainFamily::Solana => &mut self.solana,
            ChainFamily::Tron => &mut self.tron,
        }
    }

    /// Whether any family holds a provisioned address
    pub fn any_address(&self) -> bool {
        ChainFamily::ALL.iter().any(|c| self.get(*c).exists())
    }
}

/// Complete hand-off payload: user identity plus wallet references
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    /// Provider user identifier, DID form for hosted providers
    pub user_id: String,
    /// Wallet references
    pub wallets: WalletSet,
    /// Encode time, milliseconds since the unix epoch
    pub timestamp_ms: u64,
}

impl HandoffPayload {
    /// Build a payload stamped with the current time
    pub fn new(user_id: impl Into<String>, wallets: WalletSet) -> Self {
        Self::with_timestamp(user_id, wallets, now_ms())
    }

    /// Build a payload with an explicit timestamp
    pub fn with_timestamp(user_id: impl Into<String>, wallets: WalletSet, timestamp_ms: u64) -> Self {
        Self {
            user_id: user_id.into(),
            wallets,
            timestamp_ms,
        }
    }

    /// Per-chain record value, identifier embedded
    pub fn chain_record(&self, chain: ChainFamily) -> Value {
        let w = self.wallets.get(chain);

        let mut m = Map::new();
        m.insert(format!("{}WalletId", chain.key()), w.wallet_id.clone().into());
        m.insert(format!("{}WalletAddress", chain.key()), w.address.clone().into());
        m.insert("userId".to_string(), self.user_id.clone().into());
        Value::Object(m)
    }

    /// Compact record covering every family.
    ///
    /// The per-family objects reuse the prefixed field names so both
    /// record forms parse through the same path.
    pub fn compact_record(&self) -> Value {
        let mut m = Map::new();
        m.insert("userId".to_string(), self.user_id.clone().into());

        for chain in ChainFamily::ALL {
            let w = self.wallets.get(chain);
            let mut f = Map::new();
            f.insert(format!("{}WalletId", chain.key()), w.wallet_id.clone().into());
            f.insert(format!("{}WalletAddress", chain.key()), w.address.clone().into());
            m.insert(chain.key().to_string(), Value::Object(f));
        }

        m.insert("timestamp".to_string(), self.timestamp_ms.into());
        Value::Object(m)
    }
}

/// Fields recovered from one compact record
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompactFields {
    /// Embedded user identifier
    pub user_id: Option<String>,
    /// EVM wallet reference
    pub evm: Option<WalletRef>,
    /// Solana wallet reference
    pub solana: Option<WalletRef>,
    /// Tron wallet reference
    pub tron: Option<WalletRef>,
    /// Encode timestamp
    pub timestamp_ms: Option<u64>,
}

/// Parse one per-chain record.
///
/// Returns the wallet reference plus any embedded user identifier,
/// or `None` when the value is not an object at all. Missing fields
/// resolve to empty strings, matching what lenient senders emit.
pub fn parse_chain_record(chain: ChainFamily, v: &Value) -> Option<(WalletRef, Option<String>)> {
    if !v.is_object() {
        return None;
    }

    let addr_key = format!("{}WalletAddress", chain.key());
    let id_key = format!("{}WalletId", chain.key());

    let address = str_field(v, &[addr_key.as_str(), "address"]);
    let wallet_id = str_field(v, &[id_key.as_str(), "walletId", "id"]);
    let user_id = embedded_user_id(v);

    Some((
        WalletRef::new(wallet_id.unwrap_or_default(), address.unwrap_or_default()),
        user_id,
    ))
}

/// Parse a compact record, tolerating missing sections
pub fn parse_compact_record(v: &Value) -> CompactFields {
    let mut out = CompactFields {
        user_id: embedded_user_id(v),
        ..Default::default()
    };

    for chain in ChainFamily::ALL {
        let Some(section) = v.get(chain.key()) else {
            continue;
        };
        let Some((wallet, _)) = parse_chain_record(chain, section) else {
            continue;
        };
        match chain {
            ChainFamily::Evm => out.evm = Some(wallet),
            ChainFamily::Solana => out.solana = Some(wallet),
            ChainFamily::Tron => out.tron = Some(wallet),
        }
    }

    out.timestamp_ms = v
        .get("timestamp")
        .and_then(Value::as_u64)
        .or_else(|| v.get("timestamp").and_then(Value::as_f64).map(|f| f as u64));

    out
}

/// First non-empty string under any of `keys`
fn str_field(v: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| v.get(*k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Embedded `userId`, whitespace trimmed, empty treated as absent
fn embedded_user_id(v: &Value) -> Option<String> {
    v.get("userId")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Milliseconds since the unix epoch
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
