// Copyright (c) 2024-2025 The OrbitX Developers

//! Relay engine state machine.
//!
//! ```text
//! Init --Arrive--> Waiting --TimerElapsed--> Navigating
//!   |                 |                          |
//!   |                 +--Unmount--> Cancelled    +-(both mechanisms
//!   +--Arrive(bad)--> Invalid                       fail)-> Failed
//! ```
//!
//! The engine never navigates on arrival: in-app browsers keep
//! writing history entries for a moment after load, and an immediate
//! deep link gets cancelled by them. Navigation happens once, after
//! [SETTLE_DELAY_MS], through the primary mechanism with a single
//! fallback, never a third attempt.

use log::{debug, error, warn};
use strum::{Display, EnumIter, EnumString};

use orbitx_bridge_deeplink::relay::{reconcile_target, target_valid};

mod error;
pub use error::Error;

mod event;
pub use event::Event;

mod output;
pub use output::Output;

/// Settle delay between target acceptance and navigation
pub const SETTLE_DELAY_MS: u64 = 3000;

/// Relay engine states
#[derive(Copy, Clone, Debug, PartialEq, Display, EnumString, EnumIter)]
pub enum State {
    /// Awaiting the wrapped target
    Init,
    /// Target accepted, settle timer pending
    Waiting,
    /// Navigation handed to the driver (terminal)
    Navigating,
    /// Target rejected, nothing will be navigated (terminal)
    Invalid,
    /// Host page went away before the timer fired (terminal)
    Cancelled,
    /// Both navigation mechanisms failed (terminal)
    Failed,
}

/// Navigation mechanism that accepted a relay
#[derive(Copy, Clone, Debug, PartialEq, Display)]
pub enum Mechanism {
    /// Hidden-frame navigation, primary
    Frame,
    /// Location replacement, fallback
    Location,
}

/// Host navigation mechanisms available to the engine
pub trait Driver {
    /// Navigate via a hidden frame, the primary mechanism
    fn navigate_frame(&mut self, target: &str) -> Result<(), Error>;

    /// Navigate by replacing the location, the fallback mechanism
    fn navigate_location(&mut self, target: &str) -> Result<(), Error>;
}

/// Relay engine, generic over the host [Driver]
pub struct Engine<DRV: Driver> {
    drv: DRV,
    state: State,
    target: Option<String>,
}

impl<DRV: Driver> Engine<DRV> {
    /// Create an engine in [State::Init]
    pub fn new(drv: DRV) -> Self {
        Self {
            drv,
            state: State::Init,
            target: None,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Reconciled target, set once a target was accepted
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Driver reference, for hosts that need it back
    pub fn driver(&self) -> &DRV {
        &self.drv
    }

    /// Update the engine with an [Event], returning the [Output] the
    /// host must execute
    pub fn update(&mut self, evt: &Event) -> Result<Output, Error> {
        match (self.state, evt) {
            (State::Init, Event::Arrive { raw_target }) => self.on_arrive(raw_target),
            (State::Waiting, Event::TimerElapsed) => self.on_timer(),
            (State::Waiting, Event::Unmount) => {
                debug!("relay cancelled before settle");
                self.state = State::Cancelled;
                Ok(Output::None)
            }
            // unmount of a settled page is a no-op
            (State::Navigating | State::Invalid | State::Cancelled | State::Failed, Event::Unmount) => {
                Ok(Output::None)
            }
            _ => Err(Error::UnexpectedEvent),
        }
    }

    fn on_arrive(&mut self, raw: &str) -> Result<Output, Error> {
        let target = reconcile_target(raw);

        if !target_valid(&target) {
            warn!("relay target rejected: '{target}'");
            self.state = State::Invalid;
            return Ok(Output::None);
        }

        debug!("relay target accepted: '{target}'");
        self.target = Some(target);
        self.state = State::Waiting;

        Ok(Output::ScheduleTimer {
            delay_ms: SETTLE_DELAY_MS,
        })
    }

    fn on_timer(&mut self) -> Result<Output, Error> {
        let target = self.target.clone().ok_or(Error::MissingTarget)?;

        match self.drv.navigate_frame(&target) {
            Ok(()) => {
                self.state = State::Navigating;
                return Ok(Output::Navigated {
                    mechanism: Mechanism::Frame,
                });
            }
            Err(e) => warn!("frame navigation failed: {e}"),
        }

        match self.drv.navigate_location(&target) {
            Ok(()) => {
                self.state = State::Navigating;
                Ok(Output::Navigated {
                    mechanism: Mechanism::Location,
                })
            }
            Err(e) => {
                error!("location navigation failed: {e}");
                self.state = State::Failed;
                Err(Error::NavigationFailed)
            }
        }
    }
}
