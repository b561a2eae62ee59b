//! Time left until the end of the sampled day.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Milliseconds from midnight to 23:59:59.999.
const LAST_MILLI_OF_DAY: i64 = 24 * 3_600_000 - 1;

/// Remaining time, floored to the whole second on construction.
///
/// Hours are not capped at 23: on a day that gains an hour to a DST change the
/// first hour reads `24:..:..`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RemainingDuration {
    millis: u64,
}

impl RemainingDuration {
    pub const ZERO: Self = Self { millis: 0 };

    /// Sub-second remainders are dropped.
    pub fn from_millis(millis: u64) -> Self {
        Self {
            millis: millis - millis % MILLIS_PER_SECOND,
        }
    }

    /// Negative spans clamp to zero.
    pub fn from_signed_millis(millis: i64) -> Self {
        Self::from_millis(u64::try_from(millis).unwrap_or(0))
    }

    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    pub fn hours(&self) -> u64 {
        self.millis / MILLIS_PER_HOUR
    }

    pub fn minutes(&self) -> u64 {
        (self.millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    pub fn seconds(&self) -> u64 {
        (self.millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    pub fn is_zero(&self) -> bool {
        self.millis == 0
    }
}

impl From<RemainingDuration> for Duration {
    fn from(remaining: RemainingDuration) -> Self {
        Duration::from_millis(remaining.millis)
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

/// 23:59:59.999 on the calendar day of `now`, in `now`'s time zone.
///
/// Returns `None` when that local time does not exist (a zone that skips the
/// last moment of the day). An ambiguous local time resolves to the earlier
/// instant.
pub fn end_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let last = now.date_naive().and_hms_milli_opt(23, 59, 59, 999)?;
    now.timezone().from_local_datetime(&last).earliest()
}

/// Time left between `now` and the end of `now`'s own calendar day.
///
/// The boundary is always derived from `now`, so a sample taken just after
/// midnight counts down the new day rather than going negative.
pub fn remaining_until_end_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> RemainingDuration {
    let millis = match end_of_day(now) {
        Some(end) => end.signed_duration_since(now).num_milliseconds(),
        None => {
            tracing::warn!(
                "end of day does not exist in local time on {}; using wall-clock difference",
                now.date_naive()
            );
            wall_clock_millis_left(now.time())
        }
    };
    RemainingDuration::from_signed_millis(millis)
}

fn wall_clock_millis_left(time: NaiveTime) -> i64 {
    // Leap seconds carry nanos past 1e9; treat them as the last milli of the second.
    let millis = i64::from(time.nanosecond() / 1_000_000).min(999);
    let elapsed = i64::from(time.num_seconds_from_midnight()) * 1_000 + millis;
    LAST_MILLI_OF_DAY - elapsed
}
