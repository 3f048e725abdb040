// Copyright (c) 2024-2025 The OrbitX Developers

//! Relay scenarios.
//!
//! These drive the full settle delay, callers pause the tokio clock.

use std::time::Duration;

use log::info;
use tokio::time::timeout;

use orbitx_bridge::relay::{run, Error, State};

use crate::mock::MockDriver;

/// Upper bound on one relay run, far past the settle delay
const SCENARIO_TIMEOUT: Duration = Duration::from_secs(30);

/// Relay a wrapped target and expect a frame navigation to `want`
pub async fn test_navigates(raw_target: &str, want: &str) -> anyhow::Result<()> {
    let engine = timeout(SCENARIO_TIMEOUT, run(MockDriver::new(), raw_target)).await??;

    info!("relay finished: {}", engine.state());

    assert_eq!(engine.state(), State::Navigating);
    assert_eq!(engine.driver().frame, vec![want.to_string()]);
    assert!(engine.driver().location.is_empty());

    Ok(())
}

/// Relay an unusable target and expect no navigation at all
pub async fn test_rejects(raw_target: &str) -> anyhow::Result<()> {
    let engine = timeout(SCENARIO_TIMEOUT, run(MockDriver::new(), raw_target)).await??;

    info!("relay finished: {}", engine.state());

    assert_eq!(engine.state(), State::Invalid);
    assert!(engine.driver().frame.is_empty());
    assert!(engine.driver().location.is_empty());

    Ok(())
}

/// Relay with a broken frame mechanism and expect the location
/// fallback to carry the navigation
pub async fn test_fallback(raw_target: &str, want: &str) -> anyhow::Result<()> {
    let engine = timeout(SCENARIO_TIMEOUT, run(MockDriver::failing_frame(), raw_target)).await??;

    assert_eq!(engine.state(), State::Navigating);
    assert!(engine.driver().frame.is_empty());
    assert_eq!(engine.driver().location, vec![want.to_string()]);

    Ok(())
}

/// Relay with no working mechanism and expect the failure to surface
pub async fn test_failure(raw_target: &str) -> anyhow::Result<()> {
    let res = timeout(SCENARIO_TIMEOUT, run(MockDriver::failing_both(), raw_target)).await?;

    assert!(matches!(res, Err(Error::NavigationFailed)));

    Ok(())
}
