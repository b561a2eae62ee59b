//! # monk-countdown
//!
//! **Time remaining today** - the ticking dial on the Monk Focus landing page,
//! as a library that can be driven from the browser or from a Tokio runtime.
//!
//! ## Pieces
//!
//! - [`Clock`] - where "now" comes from ([`SystemClock`] in production,
//!   [`ManualClock`] in tests)
//! - [`RemainingDuration`] - time left until 23:59:59.999 of the sampled day,
//!   rendered as `HH:MM:SS`
//! - [`CountdownClock`] - the `Ticking`/`Stopped` state machine that re-samples
//!   on every tick and goes quiet once deactivated
//! - [`spawn_ticker`] / [`TickerHandle`] - a 1 s Tokio driver whose handle
//!   cancels the task on `stop()` or drop (feature `tokio`)
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use monk_countdown::{CountdownClock, ManualClock};
//!
//! let start = NaiveDate::from_ymd_opt(2025, 3, 14)
//!     .and_then(|d| d.and_hms_opt(23, 0, 0))
//!     .unwrap();
//! let clock = ManualClock::from_naive(start);
//!
//! let mut countdown = CountdownClock::activate(clock.clone());
//! assert_eq!(countdown.display(), "00:59:59");
//!
//! clock.advance_secs(1);
//! assert_eq!(countdown.tick().map(|r| r.to_string()).as_deref(), Some("00:59:58"));
//!
//! countdown.deactivate();
//! assert!(countdown.tick().is_none());
//! ```

pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod remaining;
#[cfg(feature = "tokio")]
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CountdownConfig;
pub use countdown::{CountdownClock, CountdownState};
pub use error::CountdownError;
pub use remaining::{RemainingDuration, end_of_day, remaining_until_end_of_day};
#[cfg(feature = "tokio")]
pub use ticker::{TickerHandle, spawn_ticker};
