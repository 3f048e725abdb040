// Copyright (c) 2024-2025 The OrbitX Developers

//! Result links sent back to the native shell after signing flows.
//!
//! ```text
//! orbitxpay://transaction?transactionHash=..&status=..[&chainId=..][&network=..]
//! orbitxpay://signMessage?signature=..&status=..
//! orbitxpay://tron/signMessage?signature=..&status=..&message=..
//! orbitxpay://tron/signTransaction?signature=..&status=..[&transactionHash=..]&amount=..&toAddress=..
//! ```
//!
//! Builders render the links, parsers recover them on the native
//! side. Parsing is strict about the host and the mandatory fields,
//! a mismatch yields `None`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{query, APP_SCHEME};

/// Host token for transaction results
pub const TRANSACTION_HOST: &str = "transaction";
/// Host token for message-signing results
pub const SIGN_MESSAGE_HOST: &str = "signMessage";
/// Host token for Tron transaction results
pub const TRON_SIGN_TRANSACTION_HOST: &str = "tron/signTransaction";
/// Host token for Tron message-signing results
pub const TRON_SIGN_MESSAGE_HOST: &str = "tron/signMessage";

/// Flow outcome carried in every result link
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Flow completed
    Success,
    /// Provider or chain rejected the flow
    Failed,
    /// User dismissed the flow
    Cancelled,
}

fn result_url(host: &str, params: &[(String, String)]) -> String {
    format!("{APP_SCHEME}://{host}?{}", query::build(params))
}

fn host_matches(url: &str, host: &str) -> bool {
    match url.strip_prefix(&format!("{APP_SCHEME}://{host}")) {
        Some(rest) => rest.is_empty() || rest.starts_with('?'),
        None => false,
    }
}

/// Transaction result link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionResult {
    /// Transaction hash, empty when the flow did not reach the chain
    pub transaction_hash: String,
    /// Outcome
    pub status: Status,
    /// EVM chain id, when known
    pub chain_id: Option<String>,
    /// Network name, e.g. `devnet`
    pub network: Option<String>,
}

impl TransactionResult {
    /// Result for a submitted transaction
    pub fn success(hash: impl Into<String>) -> Self {
        Self {
            transaction_hash: hash.into(),
            status: Status::Success,
            chain_id: None,
            network: None,
        }
    }

    /// Result for a failed flow
    pub fn failed() -> Self {
        Self {
            transaction_hash: String::new(),
            status: Status::Failed,
            chain_id: None,
            network: None,
        }
    }

    /// Result for a user-dismissed flow
    pub fn cancelled() -> Self {
        Self {
            status: Status::Cancelled,
            ..Self::failed()
        }
    }

    /// Attach the EVM chain id
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    /// Attach a network name
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    /// Render the deep link
    pub fn url(&self) -> String {
        let mut params = vec![
            ("transactionHash".to_string(), self.transaction_hash.clone()),
            ("status".to_string(), self.status.to_string()),
        ];
        if let Some(id) = &self.chain_id {
            params.push(("chainId".to_string(), id.clone()));
        }
        if let Some(n) = &self.network {
            params.push(("network".to_string(), n.clone()));
        }
        result_url(TRANSACTION_HOST, &params)
    }

    /// Parse a transaction result link
    pub fn parse(url: &str) -> Option<Self> {
        if !host_matches(url, TRANSACTION_HOST) {
            return None;
        }
        let params = query::parse(url);

        Some(Self {
            transaction_hash: query::get(&params, "transactionHash")?.to_string(),
            status: query::get(&params, "status")?.parse().ok()?,
            chain_id: query::get(&params, "chainId").map(str::to_string),
            network: query::get(&params, "network").map(str::to_string),
        })
    }
}

/// Message-signing result link (EVM and Solana)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignMessageResult {
    /// Signature, empty on failure
    pub signature: String,
    /// Outcome
    pub status: Status,
}

impl SignMessageResult {
    /// Result for a produced signature
    pub fn success(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            status: Status::Success,
        }
    }

    /// Result for a failed flow
    pub fn failed() -> Self {
        Self {
            signature: String::new(),
            status: Status::Failed,
        }
    }

    /// Result for a user-dismissed flow
    pub fn cancelled() -> Self {
        Self {
            status: Status::Cancelled,
            ..Self::failed()
        }
    }

    /// Render the deep link
    pub fn url(&self) -> String {
        result_url(
            SIGN_MESSAGE_HOST,
            &[
                ("signature".to_string(), self.signature.clone()),
                ("status".to_string(), self.status.to_string()),
            ],
        )
    }

    /// Parse a message-signing result link
    pub fn parse(url: &str) -> Option<Self> {
        if !host_matches(url, SIGN_MESSAGE_HOST) {
            return None;
        }
        let params = query::parse(url);

        Some(Self {
            signature: query::get(&params, "signature")?.to_string(),
            status: query::get(&params, "status")?.parse().ok()?,
        })
    }
}

/// Tron message-signing result link, echoes the signed message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TronSignMessageResult {
    /// Signature, empty on failure
    pub signature: String,
    /// Outcome
    pub status: Status,
    /// Message that was signed
    pub message: String,
}

impl TronSignMessageResult {
    /// Render the deep link
    pub fn url(&self) -> String {
        result_url(
            TRON_SIGN_MESSAGE_HOST,
            &[
                ("signature".to_string(), self.signature.clone()),
                ("status".to_string(), self.status.to_string()),
                ("message".to_string(), self.message.clone()),
            ],
        )
    }

    /// Parse a Tron message-signing result link
    pub fn parse(url: &str) -> Option<Self> {
        if !host_matches(url, TRON_SIGN_MESSAGE_HOST) {
            return None;
        }
        let params = query::parse(url);

        Some(Self {
            signature: query::get(&params, "signature")?.to_string(),
            status: query::get(&params, "status")?.parse().ok()?,
            message: query::get(&params, "message").unwrap_or_default().to_string(),
        })
    }
}

/// Tron transaction result link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TronSignTransactionResult {
    /// Signature over the transaction hash, empty on failure
    pub signature: String,
    /// Outcome
    pub status: Status,
    /// Broadcast transaction id, when the chain accepted it
    pub transaction_hash: Option<String>,
    /// Amount in TRX display units
    pub amount: String,
    /// Destination address
    pub to_address: String,
}

impl TronSignTransactionResult {
    /// Render the deep link
    pub fn url(&self) -> String {
        let mut params = vec![
            ("signature".to_string(), self.signature.clone()),
            ("status".to_string(), self.status.to_string()),
        ];
        if let Some(hash) = &self.transaction_hash {
            params.push(("transactionHash".to_string(), hash.clone()));
        }
        params.push(("amount".to_string(), self.amount.clone()));
        params.push(("toAddress".to_string(), self.to_address.clone()));

        result_url(TRON_SIGN_TRANSACTION_HOST, &params)
    }

    /// Parse a Tron transaction result link
    pub fn parse(url: &str) -> Option<Self> {
        if !host_matches(url, TRON_SIGN_TRANSACTION_HOST) {
            return None;
        }
        let params = query::parse(url);

        Some(Self {
            signature: query::get(&params, "signature")?.to_string(),
            status: query::get(&params, "status")?.parse().ok()?,
            transaction_hash: query::get(&params, "transactionHash").map(str::to_string),
            amount: query::get(&params, "amount").unwrap_or_default().to_string(),
            to_address: query::get(&params, "toAddress").unwrap_or_default().to_string(),
        })
    }
}
