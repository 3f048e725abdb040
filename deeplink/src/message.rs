// Copyright (c) 2024-2025 The OrbitX Developers

//! Shell message envelopes.
//!
//! When the wallet page runs inside a shell with an in-process
//! message channel (a WebView bridge), payloads and flow results are
//! posted as JSON envelopes discriminated by a `type` tag. Envelope
//! tags and field names are wire constants shared with shipped shell
//! builds, they never change shape.

use serde::{Deserialize, Serialize};

use crate::{
    payload::HandoffPayload,
    results::{Status, TransactionResult, TronSignMessageResult, TronSignTransactionResult},
};

/// Messages posted from the wallet page to an attached shell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WalletMessage {
    /// Wallet hand-off: addresses and ids for every family plus the
    /// owning user
    #[serde(rename = "WALLET_ADDRESS", rename_all = "camelCase")]
    WalletAddress {
        /// Primary address, kept equal to the EVM address for shells
        /// predating multi-chain
        address: String,
        /// EVM address
        evm_address: String,
        /// Solana address
        solana_address: String,
        /// Tron address, empty when not provisioned
        tron_address: String,
        /// EVM wallet id
        evm_wallet_id: String,
        /// Solana wallet id
        solana_wallet_id: String,
        /// Tron wallet id
        tron_wallet_id: String,
        /// Provider user identifier
        user_id: String,
    },

    /// Transaction outcome. EVM flows reuse the historical tag.
    #[serde(rename = "SOLANA_TRANSACTION_RESULT", rename_all = "camelCase")]
    TransactionResult {
        /// Transaction hash, empty on failure
        transaction_hash: String,
        /// Outcome
        status: Status,
        /// EVM chain id, empty when not applicable
        chain_id: String,
        /// Network name, empty when not applicable
        network: String,
    },

    /// EVM message-signing outcome
    #[serde(rename = "EVM_SIGN_MESSAGE_RESULT", rename_all = "camelCase")]
    EvmSignMessageResult {
        /// Signature, empty on failure
        signature: String,
        /// Outcome
        status: Status,
        /// Message that was signed
        message: String,
        /// Chain id the page was connected to
        chain_id: String,
    },

    /// Solana message-signing outcome
    #[serde(rename = "SOLANA_SIGN_MESSAGE_RESULT", rename_all = "camelCase")]
    SolanaSignMessageResult {
        /// Signature, empty on failure
        signature: String,
        /// Outcome
        status: Status,
        /// Message that was signed
        message: String,
        /// Unused for Solana, kept for shape parity with the EVM tag
        chain_id: String,
    },

    /// Tron message-signing outcome
    #[serde(rename = "TRON_SIGN_MESSAGE_RESULT", rename_all = "camelCase")]
    TronSignMessageResult {
        /// Signature, empty on failure
        signature: String,
        /// Outcome
        status: Status,
        /// Message that was signed
        message: String,
    },

    /// Tron transaction outcome
    #[serde(rename = "TRON_SIGN_TRANSACTION_RESULT", rename_all = "camelCase")]
    TronSignTransactionResult {
        /// Signature over the transaction hash, empty on failure
        signature: String,
        /// Outcome
        status: Status,
        /// Broadcast transaction id, empty when not accepted
        transaction_hash: String,
        /// Amount in TRX display units
        amount: String,
        /// Destination address
        to_address: String,
    },
}

impl WalletMessage {
    /// Hand-off envelope for a full payload
    pub fn wallet_address(payload: &HandoffPayload) -> Self {
        let w = &payload.wallets;
        Self::WalletAddress {
            address: w.evm.address.clone(),
            evm_address: w.evm.address.clone(),
            solana_address: w.solana.address.clone(),
            tron_address: w.tron.address.clone(),
            evm_wallet_id: w.evm.wallet_id.clone(),
            solana_wallet_id: w.solana.wallet_id.clone(),
            tron_wallet_id: w.tron.wallet_id.clone(),
            user_id: payload.user_id.clone(),
        }
    }

    /// Envelope `type` tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::WalletAddress { .. } => "WALLET_ADDRESS",
            Self::TransactionResult { .. } => "SOLANA_TRANSACTION_RESULT",
            Self::EvmSignMessageResult { .. } => "EVM_SIGN_MESSAGE_RESULT",
            Self::SolanaSignMessageResult { .. } => "SOLANA_SIGN_MESSAGE_RESULT",
            Self::TronSignMessageResult { .. } => "TRON_SIGN_MESSAGE_RESULT",
            Self::TronSignTransactionResult { .. } => "TRON_SIGN_TRANSACTION_RESULT",
        }
    }
}

impl From<&TransactionResult> for WalletMessage {
    fn from(r: &TransactionResult) -> Self {
        Self::TransactionResult {
            transaction_hash: r.transaction_hash.clone(),
            status: r.status,
            chain_id: r.chain_id.clone().unwrap_or_default(),
            network: r.network.clone().unwrap_or_default(),
        }
    }
}

impl From<&TronSignMessageResult> for WalletMessage {
    fn from(r: &TronSignMessageResult) -> Self {
        Self::TronSignMessageResult {
            signature: r.signature.clone(),
            status: r.status,
            message: r.message.clone(),
        }
    }
}

impl From<&TronSignTransactionResult> for WalletMessage {
    fn from(r: &TronSignTransactionResult) -> Self {
        Self::TronSignTransactionResult {
            signature: r.signature.clone(),
            status: r.status,
            transaction_hash: r.transaction_hash.clone().unwrap_or_default(),
            amount: r.amount.clone(),
            to_address: r.to_address.clone(),
        }
    }
}
