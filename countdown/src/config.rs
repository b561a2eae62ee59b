//! Countdown configuration.
//!
//! Parsed from TOML, e.g. the `countdown.toml` the landing page embeds:
//!
//! ```toml
//! tick_period_ms = 1000
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::CountdownError;

const DEFAULT_TICK_PERIOD_MS: u64 = 1_000;
const MAX_TICK_PERIOD_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountdownConfig {
    /// Delay between re-samples of the clock (default: 1000ms)
    pub tick_period_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        }
    }
}

impl CountdownConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, CountdownError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CountdownError> {
        if self.tick_period_ms == 0 || self.tick_period_ms > MAX_TICK_PERIOD_MS {
            return Err(CountdownError::InvalidTickPeriod {
                millis: self.tick_period_ms,
            });
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}
