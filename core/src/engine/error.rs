// Copyright (c) 2024-2025 The OrbitX Developers

//! Relay engine errors

use thiserror::Error;

/// Relay engine errors
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Event not valid in the current state
    #[error("unexpected event for current state")]
    UnexpectedEvent,

    /// Engine reached the timer without a stored target
    #[error("no relay target stored")]
    MissingTarget,

    /// Both navigation mechanisms failed
    #[error("navigation failed on every mechanism")]
    NavigationFailed,

    /// Mechanism not available on this host
    #[error("navigation mechanism unavailable")]
    Unavailable,
}
