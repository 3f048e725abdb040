// Copyright (c) 2024-2025 The OrbitX Developers

//! Relay engine input events

/// [`Engine`][super::Engine] input events, produced by the hosting
/// page's lifecycle
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Page loaded with the raw `url` parameter value, already
    /// query-parsed by the host. Empty when the parameter was absent.
    Arrive {
        /// Target as received
        raw_target: String,
    },

    /// Settle timer elapsed
    TimerElapsed,

    /// Hosting page unmounted
    Unmount,
}

impl Event {
    /// Arrival event for a raw target parameter
    pub fn arrive(raw_target: impl Into<String>) -> Self {
        Self::Arrive {
            raw_target: raw_target.into(),
        }
    }
}
