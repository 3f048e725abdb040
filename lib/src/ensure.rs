// Copyright (c) 2024-2025 The OrbitX Developers

//! Wallet provisioning.
//!
//! Before hand-off every chain family must hold a wallet. EVM and
//! Solana are load-bearing: failing to provision either aborts the
//! flow. Tron is opportunistic: its creation failures are logged and
//! the payload ships without it.
//!
//! Provisioning is split from delivery so it stays unit-testable:
//! [WalletSnapshot] captures provider state, [ensure_wallets] turns
//! it into a complete [WalletSet], and the caller decides what to do
//! with the result (see [crate::BridgeHandle::ensure_and_notify]).

use log::{debug, info, warn};
use serde_json::{json, Value};

use orbitx_bridge_deeplink::{
    chain::ChainFamily,
    payload::{WalletRef, WalletSet},
};

use crate::{
    error::Error,
    provider::{Identity, LinkedAccount, WalletProvider},
};

/// Provider wallet state observed before provisioning
#[derive(Clone, Debug, Default)]
pub struct WalletSnapshot {
    /// EVM wallet records
    pub evm: Vec<Value>,
    /// Solana wallet records
    pub solana: Vec<Value>,
    /// Tron wallet records; Tron wallets only surface as linked
    /// accounts
    pub tron: Vec<LinkedAccount>,
    /// All linked accounts, consulted for wallet-id resolution
    pub linked: Vec<LinkedAccount>,
}

impl WalletSnapshot {
    /// Collect the snapshot for a provider identity
    pub async fn load<P: WalletProvider>(provider: &P, identity: &Identity) -> Result<Self, Error> {
        let evm = provider.wallets(ChainFamily::Evm).await?;
        let solana = provider.wallets(ChainFamily::Solana).await?;

        let linked = identity.linked_accounts.clone();
        let tron = linked
            .iter()
            .filter(|a| a.is_wallet_for(ChainFamily::Tron))
            .cloned()
            .collect();

        Ok(Self {
            evm,
            solana,
            tron,
            linked,
        })
    }
}

/// Ensure a wallet exists for every chain family, creating what is
/// missing.
///
/// Fails only when a required family cannot be provisioned, or when
/// nothing ends up with an address at all.
pub async fn ensure_wallets<P: WalletProvider>(
    provider: &P,
    snapshot: &WalletSnapshot,
) -> Result<WalletSet, Error> {
    let mut set = WalletSet::default();

    for chain in ChainFamily::ALL {
        let value = match existing_record(snapshot, chain) {
            Some(v) => Some(v),
            None => {
                info!("no {chain} wallet, creating");
                match provider.create_wallet(chain).await {
                    Ok(created) => Some(unwrap_created(created)),
                    Err(e) if chain.required() => return Err(Error::WalletCreation(chain, e)),
                    Err(e) => {
                        warn!("{chain} wallet creation failed, continuing without: {e}");
                        None
                    }
                }
            }
        };

        if let Some(v) = &value {
            let address = field_string(v, "address");
            let wallet_id = resolve_wallet_id(&snapshot.linked, chain, &address, v);
            debug!("{chain} wallet: address='{address}' id='{wallet_id}'");
            *set.get_mut(chain) = WalletRef::new(wallet_id, address);
        }
    }

    if !set.any_address() {
        return Err(Error::NoWallets);
    }

    Ok(set)
}

fn existing_record(snapshot: &WalletSnapshot, chain: ChainFamily) -> Option<Value> {
    match chain {
        ChainFamily::Evm => snapshot.evm.first().cloned(),
        ChainFamily::Solana => snapshot.solana.first().cloned(),
        ChainFamily::Tron => snapshot
            .tron
            .first()
            .map(|a| json!({ "address": a.address, "walletId": a.wallet_id })),
    }
}

/// Creation responses sometimes nest the wallet one level down
fn unwrap_created(v: Value) -> Value {
    match v.get("wallet") {
        Some(inner) if inner.is_object() => inner.clone(),
        _ => v,
    }
}

fn field_string(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Resolve a provider wallet id: the identity's linked-account
/// records win over any id field on the creation response
fn resolve_wallet_id(
    linked: &[LinkedAccount],
    chain: ChainFamily,
    address: &str,
    wallet: &Value,
) -> String {
    if !address.is_empty() {
        let hit = linked.iter().find(|a| {
            a.is_wallet_for(chain)
                && a.address.eq_ignore_ascii_case(address)
                && !a.wallet_id.is_empty()
        });
        if let Some(a) = hit {
            return a.wallet_id.clone();
        }
    }

    for key in ["walletId", "id"] {
        let id = field_string(wallet, key);
        if !id.is_empty() {
            return id;
        }
    }

    String::new()
}
