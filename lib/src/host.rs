// Copyright (c) 2024-2025 The OrbitX Developers

//! Host shell abstraction.
//!
//! Delivery channels the surrounding shell may provide. A WebView
//! shell offers all three; a plain browser tab offers storage and
//! navigation only. Every channel is best-effort from the bridge's
//! point of view, see [crate::sender].

use thiserror::Error;

use orbitx_bridge_deeplink::message::WalletMessage;

/// Host channel errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    /// Channel not present in this shell
    #[error("channel unavailable")]
    Unavailable,

    /// Shell-reported failure
    #[error("{0}")]
    Failed(String),
}

/// Delivery channels provided by the hosting shell
pub trait Host {
    /// Whether an in-process message channel exists
    fn message_channel_available(&self) -> bool;

    /// Post a message envelope to the shell
    fn post_message(&self, message: &WalletMessage) -> Result<(), HostError>;

    /// Mirror a value into shell-visible storage
    fn storage_put(&self, key: &str, value: &str) -> Result<(), HostError>;

    /// Navigate the page, triggering deep-link interception
    fn navigate(&self, url: &str) -> Result<(), HostError>;
}

/// Host with no channels at all.
///
/// Keeps bridge flows runnable in plain processes and tests; every
/// delivery reports [HostError::Unavailable] and the sender logs and
/// moves on.
pub struct NullHost;

impl Host for NullHost {
    fn message_channel_available(&self) -> bool {
        false
    }

    fn post_message(&self, _message: &WalletMessage) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }

    fn storage_put(&self, _key: &str, _value: &str) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }

    fn navigate(&self, _url: &str) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }
}
