// Copyright (c) 2024-2025 The OrbitX Developers

//! Wallet provider abstraction.
//!
//! Models the hosted embedded-wallet service: authentication state,
//! wallet provisioning and signing. Implementations bind a real
//! provider SDK; tests script a mock. Wallet records stay raw
//! [Value]s because their shape drifts between SDK releases, the
//! bridge extracts what it needs tolerantly in [crate::ensure].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use orbitx_bridge_deeplink::chain::ChainFamily;

/// Provider call errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No authenticated user
    #[error("not authenticated")]
    NotAuthenticated,

    /// Chain family not supported by this provider build
    #[error("unsupported chain family {0}")]
    Unsupported(ChainFamily),

    /// Wallet creation rejected
    #[error("wallet creation failed: {0}")]
    Creation(String),

    /// Signing rejected or failed
    #[error("signing failed: {0}")]
    Signing(String),

    /// Anything else the SDK reports
    #[error("provider error: {0}")]
    Other(String),
}

/// One linked account on the provider identity
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkedAccount {
    /// Account kind, wallet records use `wallet`
    #[serde(rename = "type")]
    pub kind: String,
    /// Chain tag, see [ChainFamily::provider_tag]
    pub chain_type: String,
    /// On-chain address
    pub address: String,
    /// Provider wallet identifier
    pub wallet_id: String,
}

impl LinkedAccount {
    /// Linked wallet record for a chain family
    pub fn wallet(chain: ChainFamily, address: impl Into<String>, wallet_id: impl Into<String>) -> Self {
        Self {
            kind: "wallet".to_string(),
            chain_type: chain.provider_tag().to_string(),
            address: address.into(),
            wallet_id: wallet_id.into(),
        }
    }

    /// Whether this is a wallet record for the given family
    pub fn is_wallet_for(&self, chain: ChainFamily) -> bool {
        self.kind == "wallet" && self.chain_type == chain.provider_tag()
    }
}

/// Authenticated provider identity
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    /// Provider user identifier, DID form
    #[serde(rename = "id")]
    pub user_id: String,
    /// Linked account records
    pub linked_accounts: Vec<LinkedAccount>,
}

/// Transaction request forwarded to the provider.
///
/// Fields are opaque strings in the chain's native formats; empty
/// means unset. `cluster` selects the Solana cluster and is ignored
/// elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRequest {
    /// Destination address
    pub to: String,
    /// Value in the chain's base unit
    pub value: String,
    /// Calldata, empty for plain transfers
    pub data: String,
    /// Target chain id (EVM)
    pub chain_id: String,
    /// Gas price override (EVM)
    pub gas_price: String,
    /// Target cluster (Solana), e.g. `devnet`
    pub cluster: String,
}

/// Embedded wallet provider operations used by the bridge
#[async_trait]
pub trait WalletProvider {
    /// Authenticated identity, `None` when logged out
    async fn identity(&self) -> Result<Option<Identity>, ProviderError>;

    /// Authenticate with a passkey, returning the fresh identity
    async fn login(&self) -> Result<Identity, ProviderError>;

    /// Register a new passkey account, returning the fresh identity
    async fn signup(&self) -> Result<Identity, ProviderError>;

    /// Provider wallet records for a chain family, order as reported
    async fn wallets(&self, chain: ChainFamily) -> Result<Vec<Value>, ProviderError>;

    /// Create a wallet, returning the provider's raw creation
    /// response
    async fn create_wallet(&self, chain: ChainFamily) -> Result<Value, ProviderError>;

    /// Sign a human-readable message
    async fn sign_message(
        &self,
        chain: ChainFamily,
        address: &str,
        message: &str,
    ) -> Result<String, ProviderError>;

    /// Sign a precomputed hash, used by Tron transaction flows
    async fn sign_raw_hash(
        &self,
        chain: ChainFamily,
        address: &str,
        hash: &str,
    ) -> Result<String, ProviderError>;

    /// Sign and submit a transaction, returning its hash
    async fn send_transaction(
        &self,
        chain: ChainFamily,
        address: &str,
        req: &TransactionRequest,
    ) -> Result<String, ProviderError>;

    /// Start the provider's key export flow for a wallet
    async fn export_wallet(&self, chain: ChainFamily, address: &str) -> Result<(), ProviderError>;

    /// End the provider session
    async fn logout(&self) -> Result<(), ProviderError>;
}
