// Copyright (c) 2024-2025 The OrbitX Developers

//! Wallet hand-off scenario

use log::info;
use serde_json::Value;

use orbitx_bridge::{
    deeplink::{chain::ChainFamily, decode::decode_url, message::WalletMessage, STORAGE_KEY},
    host::Host,
    BridgeHandle,
};

use crate::mock::{Delivery, MockHost, MockProvider};

/// Expected hand-off outcome
#[derive(Clone, Debug, Default)]
pub struct Expect<'a> {
    /// Provider user identifier
    pub user_id: &'a str,
    /// EVM address after provisioning
    pub evm_address: &'a str,
    /// Solana address after provisioning
    pub solana_address: &'a str,
    /// Tron address after provisioning, empty when it stays missing
    pub tron_address: &'a str,
    /// Creations the flow must have performed, in order
    pub created: &'a [ChainFamily],
}

/// Run the hand-off flow and check provisioning and delivery
pub async fn test(provider: MockProvider, host: MockHost, expect: Expect<'_>) -> anyhow::Result<()> {
    let handle = BridgeHandle::new(provider, host);

    let wallets = handle.ensure_and_notify().await?;

    info!("provisioned: {:?}", wallets);

    // Check provisioned addresses
    assert_eq!(wallets.evm.address, expect.evm_address);
    assert_eq!(wallets.solana.address, expect.solana_address);
    assert_eq!(wallets.tron.address, expect.tron_address);

    // Check which wallets were created
    assert_eq!(handle.provider().created(), expect.created);

    // Navigation ships last
    let deliveries = handle.host().deliveries();
    let Some(Delivery::Navigation(url)) = deliveries.last() else {
        anyhow::bail!("expected a trailing navigation, got {:?}", deliveries.last());
    };

    // Message envelope first when the shell has a channel
    if handle.host().message_channel_available() {
        let Some(Delivery::Message(msg)) = deliveries.first() else {
            anyhow::bail!("expected a leading message, got {:?}", deliveries.first());
        };
        let WalletMessage::WalletAddress {
            evm_address,
            user_id,
            ..
        } = msg
        else {
            anyhow::bail!("expected a wallet address envelope, got {:?}", msg);
        };
        assert_eq!(evm_address, expect.evm_address);
        assert_eq!(user_id, expect.user_id);
    }

    // Storage mirror carries the same user
    for d in &deliveries {
        if let Delivery::Storage { key, value } = d {
            assert_eq!(key, STORAGE_KEY);
            let v: Value = serde_json::from_str(value)?;
            assert_eq!(v["userId"], expect.user_id);
        }
    }

    // Hand-off link decodes back to the same payload
    info!("hand-off url: {}", url);
    let decoded = decode_url(url);
    assert_eq!(decoded.require_user_id()?, expect.user_id);
    assert_eq!(wallet_address(&decoded, ChainFamily::Evm), expect.evm_address);
    assert_eq!(
        wallet_address(&decoded, ChainFamily::Solana),
        expect.solana_address
    );
    assert_eq!(wallet_address(&decoded, ChainFamily::Tron), expect.tron_address);

    // Re-running must not deliver again
    let before = deliveries.len();
    handle.ensure_and_notify().await?;
    assert_eq!(handle.host().deliveries().len(), before);

    Ok(())
}

fn wallet_address(decoded: &orbitx_bridge::deeplink::decode::DecodedPayload, chain: ChainFamily) -> String {
    decoded
        .wallet(chain)
        .map(|w| w.address.clone())
        .unwrap_or_default()
}
