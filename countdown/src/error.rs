//! Errors surfaced by countdown configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountdownError {
    /// Tick period outside `1..=1000` ms. Slower ticks would let the
    /// seconds field lag behind the clock.
    #[error("tick period must be between 1 and 1000 ms, got {millis} ms")]
    InvalidTickPeriod { millis: u64 },

    #[error("invalid countdown config: {0}")]
    Config(#[from] toml::de::Error),
}
