//! Tokio driver for a [`CountdownClock`].
//!
//! The spawned task is owned by a [`TickerHandle`]:
//! - `stop()` (or dropping the handle) cancels it exactly once
//! - each tick checks the active flag and renders under one lock, so once
//!   `stop()` returns no further render can start
//! - late ticks are delayed, not bunched up (drift is not compensated)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::clock::Clock;
use crate::countdown::CountdownClock;
use crate::remaining::RemainingDuration;

#[derive(Debug)]
struct Gate {
    lock: Mutex<()>,
    active: AtomicBool,
}

/// Owned handle to a running ticker.
#[derive(Debug)]
#[must_use = "dropping the handle stops the ticker"]
pub struct TickerHandle {
    gate: Arc<Gate>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn is_active(&self) -> bool {
        self.gate.active.load(Ordering::Acquire)
    }

    /// Cancel the ticker. No render starts after this returns.
    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        {
            let _guard = self.gate.lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.gate.active.store(false, Ordering::Release);
        }
        task.abort();
        tracing::debug!("countdown ticker stopped");
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Render the countdown's current value, then re-tick it every `period`.
///
/// Must be called from inside a Tokio runtime. `render` receives the initial
/// value synchronously, before this function returns.
///
/// # Panics
///
/// Panics if `period` is zero, like [`tokio::time::interval`]. Periods taken
/// from a validated [`crate::CountdownConfig`] are never zero.
pub fn spawn_ticker<C, F>(
    mut countdown: CountdownClock<C>,
    period: Duration,
    mut render: F,
) -> TickerHandle
where
    C: Clock + Send + 'static,
    F: FnMut(RemainingDuration) + Send + 'static,
{
    render(countdown.remaining());

    let gate = Arc::new(Gate {
        lock: Mutex::new(()),
        active: AtomicBool::new(countdown.is_ticking()),
    });
    let task_gate = Arc::clone(&gate);
    // Anchor the cadence at spawn time, not at the task's first poll.
    let first_tick = Instant::now() + period;

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(first_tick, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            let _guard = task_gate
                .lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if !task_gate.active.load(Ordering::Acquire) {
                break;
            }
            match countdown.tick() {
                Some(remaining) => render(remaining),
                None => break,
            }
        }
        countdown.deactivate();
    });

    tracing::debug!(?period, "countdown ticker started");
    TickerHandle {
        gate,
        task: Some(task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::NaiveDate;

    fn clock_at(h: u32, m: u32, s: u32) -> ManualClock {
        let start = NaiveDate::from_ymd_opt(2025, 1, 20)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid time");
        ManualClock::from_naive(start)
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(RemainingDuration) + Send + 'static) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&frames);
        (frames, move |r: RemainingDuration| {
            sink.lock().expect("frames lock").push(r.to_string())
        })
    }

    /// Move the fake wall clock and tokio's paused clock together, one second at a time.
    async fn step(clock: &ManualClock, seconds: u32) {
        for _ in 0..seconds {
            clock.advance_secs(1);
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn renders_initial_value_before_first_tick() {
        let clock = clock_at(22, 0, 0);
        let (frames, render) = recorder();

        let handle = spawn_ticker(
            CountdownClock::activate(clock.clone()),
            Duration::from_secs(1),
            render,
        );

        assert_eq!(*frames.lock().expect("frames lock"), vec!["01:59:59"]);
        assert!(handle.is_active());
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let clock = clock_at(22, 0, 0);
        let (frames, render) = recorder();
        let handle = spawn_ticker(
            CountdownClock::activate(clock.clone()),
            Duration::from_secs(1),
            render,
        );

        step(&clock, 3).await;

        assert_eq!(
            *frames.lock().expect("frames lock"),
            vec!["01:59:59", "01:59:58", "01:59:57", "01:59:56"]
        );
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks() {
        let clock = clock_at(22, 0, 0);
        let (frames, render) = recorder();
        let handle = spawn_ticker(
            CountdownClock::activate(clock.clone()),
            Duration::from_secs(1),
            render,
        );

        step(&clock, 2).await;
        handle.stop();
        let samples = clock.samples();
        let rendered = frames.lock().expect("frames lock").len();

        step(&clock, 5).await;

        assert_eq!(clock.samples(), samples);
        assert_eq!(frames.lock().expect("frames lock").len(), rendered);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_ticker() {
        let clock = clock_at(8, 0, 0);
        let (frames, render) = recorder();
        let handle = spawn_ticker(
            CountdownClock::activate(clock.clone()),
            Duration::from_secs(1),
            render,
        );
        drop(handle);

        step(&clock, 4).await;

        assert_eq!(clock.samples(), 1);
        assert_eq!(frames.lock().expect("frames lock").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_countdown_never_ticks() {
        let clock = clock_at(8, 0, 0);
        let mut countdown = CountdownClock::activate(clock.clone());
        countdown.deactivate();

        let (frames, render) = recorder();
        let handle = spawn_ticker(countdown, Duration::from_secs(1), render);
        assert!(!handle.is_active());

        step(&clock, 3).await;
        assert_eq!(clock.samples(), 1);
        assert_eq!(frames.lock().expect("frames lock").len(), 1);
    }
}
