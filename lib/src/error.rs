// Copyright (c) 2024-2025 The OrbitX Developers

//! Bridge error type

use thiserror::Error;

use orbitx_bridge_deeplink::chain::ChainFamily;

use crate::provider::ProviderError;

/// Bridge operation errors
#[derive(Debug, Error)]
pub enum Error {
    /// No authenticated provider identity
    #[error("not authenticated")]
    NotAuthenticated,

    /// A required chain family could not be provisioned
    #[error("{0} wallet creation failed: {1}")]
    WalletCreation(ChainFamily, ProviderError),

    /// Provisioning produced no usable address on any family
    #[error("no wallet addresses found even after creation")]
    NoWallets,

    /// Provider call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Payload handling failed
    #[error(transparent)]
    Protocol(#[from] orbitx_bridge_deeplink::Error),
}
