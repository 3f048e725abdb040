// Copyright (c) 2024-2025 The OrbitX Developers

//! Chain registry: EVM display names and Solana cluster endpoints

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// EVM chain-id display names
pub static CHAIN_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1", "Ethereum Mainnet"),
        ("56", "BNB Smart Chain"),
        ("137", "Polygon"),
        ("42161", "Arbitrum One"),
        ("10", "Optimism"),
        ("8453", "Base"),
        ("1301", "Unichain Sepolia"),
        ("84532", "Base Sepolia"),
    ])
});

/// Display name for an EVM chain id
pub fn chain_name(chain_id: &str) -> String {
    match CHAIN_NAMES.get(chain_id) {
        Some(name) => (*name).to_string(),
        None => format!("Chain {chain_id}"),
    }
}

/// Solana cluster endpoints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolanaCluster {
    /// Display name
    pub name: &'static str,
    /// Public RPC endpoint
    pub rpc_url: &'static str,
    /// Explorer query suffix, empty on mainnet
    pub explorer_suffix: &'static str,
}

/// Known Solana clusters keyed by short name
pub static SOLANA_CLUSTERS: Lazy<HashMap<&'static str, SolanaCluster>> = Lazy::new(|| {
    HashMap::from([
        (
            "mainnet-beta",
            SolanaCluster {
                name: "Solana Mainnet",
                rpc_url: "https://api.mainnet-beta.solana.com",
                explorer_suffix: "",
            },
        ),
        (
            "devnet",
            SolanaCluster {
                name: "Solana Devnet",
                rpc_url: "https://api.devnet.solana.com",
                explorer_suffix: "?cluster=devnet",
            },
        ),
        (
            "testnet",
            SolanaCluster {
                name: "Solana Testnet",
                rpc_url: "https://api.testnet.solana.com",
                explorer_suffix: "?cluster=testnet",
            },
        ),
    ])
});

/// Cluster record by short name, unknown names fall back to devnet
pub fn solana_cluster(cluster: &str) -> &'static SolanaCluster {
    SOLANA_CLUSTERS
        .get(cluster)
        .unwrap_or_else(|| &SOLANA_CLUSTERS["devnet"])
}
