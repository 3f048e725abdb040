// Copyright (c) 2024-2025 The OrbitX Developers

//! Hand-off payload vectors

use rand::Rng;

use orbitx_bridge_deeplink::payload::{HandoffPayload, WalletRef, WalletSet};

/// One hand-off payload vector
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    pub name: &'static str,
    pub user_id: &'static str,
    pub evm_wallet_id: &'static str,
    pub evm_address: &'static str,
    pub solana_wallet_id: &'static str,
    pub solana_address: &'static str,
    pub tron_wallet_id: &'static str,
    pub tron_address: &'static str,
}

impl Vector {
    /// Payload for this vector, timestamp fixed for reproducible URLs
    pub fn payload(&self) -> HandoffPayload {
        HandoffPayload::with_timestamp(
            self.user_id,
            WalletSet {
                evm: WalletRef::new(self.evm_wallet_id, self.evm_address),
                solana: WalletRef::new(self.solana_wallet_id, self.solana_address),
                tron: WalletRef::new(self.tron_wallet_id, self.tron_address),
            },
            1714060800000,
        )
    }
}

/// Payload vectors covering provisioning shapes seen in production
pub const VECTORS: &[Vector] = &[
    Vector {
        name: "three-chain",
        user_id: "did:privy:clx7y0qbf00krju0fvhfnkp2w",
        evm_wallet_id: "cm9e1xo1t00f3l40mbvhqr8kq",
        evm_address: "0x52908400098527886E0F7030069857D2E4169EE7",
        solana_wallet_id: "cm9e1xp5a00f4l40m2u0a7dcn",
        solana_address: "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1",
        tron_wallet_id: "cm9e1xqj200f5l40mh3x0sw9d",
        tron_address: "TJRabPrwbZy45sbavfcjinPJC18kjpRTv8",
    },
    Vector {
        name: "no-tron",
        user_id: "did:privy:cm1q8r3z500a1mc0fke9wh27x",
        evm_wallet_id: "cm1q8r4hj00a2mc0f7vpo5m3e",
        evm_address: "0x8617E340B3D01FA5F11F306F4090FD50E238070D",
        solana_wallet_id: "cm1q8r5qt00a3mc0fx92btjl8",
        solana_address: "DRpbCBMxVnDK7maPM5tGv6MvB3v1sRMC86PZ8okm21hy",
        tron_wallet_id: "",
        tron_address: "",
    },
    Vector {
        name: "legacy-short-id",
        user_id: "u-10384",
        evm_wallet_id: "",
        evm_address: "0xde709f2102306220921060314715629080e2fb77",
        solana_wallet_id: "",
        solana_address: "",
        tron_wallet_id: "",
        tron_address: "",
    },
];

/// Random but shape-plausible payload
pub fn random_payload<R: Rng>(rng: &mut R) -> HandoffPayload {
    let mut evm = [0u8; 20];
    rng.fill(&mut evm);

    let mut solana = [0u8; 32];
    rng.fill(&mut solana);

    let tag: u32 = rng.gen();

    HandoffPayload::new(
        format!("did:privy:{tag:08x}"),
        WalletSet {
            evm: WalletRef::new(format!("w{tag:08x}e"), format!("0x{}", hex::encode(evm))),
            solana: WalletRef::new(format!("w{tag:08x}s"), hex::encode(solana)),
            tron: WalletRef::default(),
        },
    )
}
