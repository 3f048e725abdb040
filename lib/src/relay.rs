// Copyright (c) 2024-2025 The OrbitX Developers

//! Async relay runner.
//!
//! Drives the relay engine against real time: accept the target,
//! sleep out the settle delay, navigate. Hosts embedding the engine
//! in their own event loop use [Engine] directly instead.

use std::time::Duration;

use log::debug;
use tokio::time::sleep;

pub use orbitx_bridge_core::{Driver, Engine, Error, Event, Mechanism, Output, State, SETTLE_DELAY_MS};

/// Run one relay pass over a raw target parameter, returning the
/// engine in its terminal state.
///
/// An invalid target is a terminal outcome, not an error; failed
/// navigation surfaces as [Error::NavigationFailed].
pub async fn run<DRV: Driver>(drv: DRV, raw_target: &str) -> Result<Engine<DRV>, Error> {
    let mut engine = Engine::new(drv);

    let out = engine.update(&Event::arrive(raw_target))?;

    if let Output::ScheduleTimer { delay_ms } = out {
        debug!("settling for {delay_ms}ms");
        sleep(Duration::from_millis(delay_ms)).await;
        engine.update(&Event::TimerElapsed)?;
    }

    Ok(engine)
}
