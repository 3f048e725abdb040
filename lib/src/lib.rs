// Copyright (c) 2024-2025 The OrbitX Developers

//! OrbitX embedded-wallet native bridge.
//!
//! Native-side companion to the hosted wallet page. The bridge owns
//! two seams: a [provider::WalletProvider] binding for the embedded
//! wallet service, and a [host::Host] binding for whatever shell the
//! page runs in. On top of those it guarantees wallets exist for
//! every chain family ([ensure]), renders the hand-off payload in its
//! redundant forms and delivers it fire-and-forget ([sender]), and
//! reports signing and transaction outcomes back through result
//! links ([BridgeHandle]).
//!
//! The wire protocol itself lives in [`orbitx_bridge_deeplink`] and
//! the relay page state machine in [`orbitx_bridge_core`], re-exported
//! here as [deeplink] and through [relay].

pub mod chains;
pub mod ensure;
pub mod host;
pub mod provider;
pub mod relay;
pub mod sender;
pub mod session;

mod error;
pub use error::Error;

mod handle;
pub use handle::BridgeHandle;

pub use host::{Host, HostError, NullHost};

pub use orbitx_bridge_deeplink as deeplink;
