// Copyright (c) 2024-2025 The OrbitX Developers

//! Chain families bridged by the wallet hand-off protocol

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Chain family of a provider-managed wallet.
///
/// Query parameter keys and payload field prefixes use the lowercase
/// name, see [ChainFamily::key].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    /// EVM networks, one keypair shared across mainnet and L2s
    Evm,
    /// Solana clusters
    Solana,
    /// Tron, provisioned opportunistically
    Tron,
}

impl ChainFamily {
    /// All bridged families in encode and decode priority order
    pub const ALL: [Self; 3] = [Self::Evm, Self::Solana, Self::Tron];

    /// Query parameter key and payload field prefix
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Solana => "solana",
            Self::Tron => "tron",
        }
    }

    /// `chainType` tag used in provider linked-account records
    pub const fn provider_tag(&self) -> &'static str {
        match self {
            Self::Evm => "ethereum",
            Self::Solana => "solana",
            Self::Tron => "tron",
        }
    }

    /// Whether hand-off must fail when no wallet for this family can
    /// be provisioned
    pub const fn required(&self) -> bool {
        !matches!(self, Self::Tron)
    }
}
