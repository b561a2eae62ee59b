//! The countdown state machine.
//!
//! `CountdownClock` does not schedule anything itself. A driver (the browser
//! interval in the landing page, or [`crate::ticker`] on Tokio) calls
//! [`CountdownClock::tick`] on its cadence and renders whatever comes back.

use crate::clock::Clock;
use crate::remaining::{RemainingDuration, remaining_until_end_of_day};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Ticking,
    Stopped,
}

/// Time remaining until local midnight, re-sampled on every tick.
#[derive(Debug)]
pub struct CountdownClock<C> {
    clock: C,
    state: CountdownState,
    remaining: RemainingDuration,
    ticks: u64,
}

impl<C: Clock> CountdownClock<C> {
    /// Sample the clock once and start ticking.
    ///
    /// The first value is available straight away through [`Self::remaining`],
    /// so a view can render real digits before the first tick fires.
    pub fn activate(clock: C) -> Self {
        let remaining = remaining_until_end_of_day(&clock.now());
        tracing::debug!("countdown activated at {remaining}");
        Self {
            clock,
            state: CountdownState::Ticking,
            remaining,
            ticks: 0,
        }
    }

    /// Re-sample and recompute. Returns `None` without touching the clock once
    /// the countdown has been deactivated.
    pub fn tick(&mut self) -> Option<RemainingDuration> {
        if self.state == CountdownState::Stopped {
            return None;
        }
        self.remaining = remaining_until_end_of_day(&self.clock.now());
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, "countdown {}", self.remaining);
        Some(self.remaining)
    }

    /// Stop ticking. Returns `true` only for the call that actually stopped it.
    pub fn deactivate(&mut self) -> bool {
        if self.state == CountdownState::Stopped {
            return false;
        }
        self.state = CountdownState::Stopped;
        tracing::debug!(ticks = self.ticks, "countdown deactivated");
        true
    }
}

impl<C> CountdownClock<C> {
    /// Last computed value (frozen once stopped).
    pub fn remaining(&self) -> RemainingDuration {
        self.remaining
    }

    /// Last computed value as `HH:MM:SS`.
    pub fn display(&self) -> String {
        self.remaining.to_string()
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_ticking(&self) -> bool {
        self.state == CountdownState::Ticking
    }

    /// Ticks completed since activation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
