//! Clock capability.
//!
//! The countdown never calls the system clock directly. It asks a [`Clock`],
//! so tests can hand it a [`ManualClock`] and move time by hand.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeDelta, TimeZone};

/// Source of the current instant.
///
/// The associated time zone decides which calendar day a sample belongs to,
/// and therefore where "end of day" falls.
pub trait Clock {
    type Tz: TimeZone;

    /// Sample the current instant.
    fn now(&self) -> DateTime<Self::Tz>;
}

/// The host's wall clock in the viewer's local time zone.
///
/// On `wasm32` targets chrono reads this from the browser's `Date`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Controllable clock for tests and demos.
///
/// Clones share the same instant, so a test can keep one handle and move time
/// while the countdown (or a spawned ticker) holds another. Every call to
/// [`Clock::now`] is counted, which lets tests prove that nothing sampled the
/// clock after teardown.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<ManualState>>,
}

#[derive(Debug)]
struct ManualState {
    now: DateTime<FixedOffset>,
    samples: u64,
}

impl ManualClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ManualState { now, samples: 0 })),
        }
    }

    /// Start at a wall-clock time in UTC.
    pub fn from_naive(now: NaiveDateTime) -> Self {
        Self::new(now.and_utc().fixed_offset())
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        self.state(|state| state.now = now);
    }

    pub fn advance(&self, by: TimeDelta) {
        self.state(|state| state.now += by);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance(TimeDelta::seconds(secs));
    }

    /// Current instant, without counting as a sample.
    pub fn peek(&self) -> DateTime<FixedOffset> {
        self.state(|state| state.now)
    }

    /// How many times [`Clock::now`] has been called across all clones.
    pub fn samples(&self) -> u64 {
        self.state(|state| state.samples)
    }

    fn state<T>(&self, f: impl FnOnce(&mut ManualState) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl Clock for ManualClock {
    type Tz = FixedOffset;

    fn now(&self) -> DateTime<FixedOffset> {
        self.state(|state| {
            state.samples += 1;
            state.now
        })
    }
}
