// Copyright (c) 2024-2025 The OrbitX Developers

//! Relay engine outputs

use super::Mechanism;

/// [`Engine`][super::Engine] outputs, executed by the hosting page
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Output {
    /// Nothing to do
    None,

    /// Start the settle timer, then feed
    /// [TimerElapsed][super::Event::TimerElapsed] back
    ScheduleTimer {
        /// Delay before the timer fires
        delay_ms: u64,
    },

    /// Navigation was handed to the driver
    Navigated {
        /// Mechanism that accepted it
        mechanism: Mechanism,
    },
}
