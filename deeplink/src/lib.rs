// Copyright (c) 2024-2025 The OrbitX Developers

//! OrbitX wallet bridge deep-link protocol.
//!
//! Wallet hand-off between the hosted wallet page and the native shell
//! travels over a custom URL scheme, [`APP_SCHEME`]`://`[`WALLET_HOST`].
//! In-app browsers drop, reorder, truncate and re-encode query
//! parameters in transit, so the encoder writes the payload in several
//! redundant forms ([`encode`]) and the decoder recovers the best
//! surviving form in a fixed priority order ([`decode`]).
//!
//! [`relay`] covers the intermediate redirect page contract, and
//! [`results`] the signing and transaction result links sent back the
//! other way once a flow completes.

pub mod chain;
pub mod decode;
pub mod encode;
pub mod message;
pub mod payload;
pub mod query;
pub mod relay;
pub mod results;

mod error;
pub use error::Error;

/// URL scheme claimed by the native application
pub const APP_SCHEME: &str = "orbitxpay";

/// Host token for the wallet hand-off screen
pub const WALLET_HOST: &str = "walletscreen";

/// Scheme root for wallet hand-off links.
///
/// A relay target equal to this exact string carries no payload and
/// must be rejected, see [relay::target_valid].
pub const WALLET_URL_ROOT: &str = "orbitxpay://walletscreen";

/// Storage key for the mirrored wallet payload
pub const STORAGE_KEY: &str = "orbitx.wallet.payload";
