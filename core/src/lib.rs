// Copyright (c) 2024-2025 The OrbitX Developers

//! OrbitX redirect-relay engine.
//!
//! Platform-independent state machine behind the relay page: it turns
//! a wrapped `url` parameter into a single deep-link navigation after
//! a settle delay. Hosts feed it [Event]s, execute the returned
//! [Output]s, and supply the navigation mechanisms through a [Driver]
//! implementation.

pub mod engine;

pub use engine::{Driver, Engine, Error, Event, Mechanism, Output, State, SETTLE_DELAY_MS};
