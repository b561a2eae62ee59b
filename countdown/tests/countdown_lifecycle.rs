use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use monk_countdown::{
    Clock, CountdownClock, CountdownConfig, CountdownState, ManualClock, RemainingDuration,
    remaining_until_end_of_day, spawn_ticker,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn wall(date: (i32, u32, u32), h: u32, m: u32, s: u32) -> anyhow::Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .ok_or_else(|| anyhow::anyhow!("invalid wall-clock time"))
}

#[test]
fn page_session_from_activation_to_teardown() -> anyhow::Result<()> {
    init_tracing();
    let clock = ManualClock::from_naive(wall((2025, 12, 31), 23, 59, 57)?);

    let mut countdown = CountdownClock::activate(clock.clone());
    let mut shown = vec![countdown.display()];
    for _ in 0..4 {
        clock.advance_secs(1);
        if let Some(remaining) = countdown.tick() {
            shown.push(remaining.to_string());
        }
    }

    // New Year's Eve into the new year: the last second holds at zero, then a full day.
    assert_eq!(
        shown,
        vec!["00:00:02", "00:00:01", "00:00:00", "23:59:59", "23:59:58"]
    );

    assert!(countdown.deactivate());
    assert_eq!(countdown.state(), CountdownState::Stopped);

    let samples = clock.samples();
    clock.advance(TimeDelta::seconds(30));
    assert!(countdown.tick().is_none());
    assert_eq!(clock.samples(), samples);
    assert_eq!(countdown.display(), "23:59:58");
    Ok(())
}

#[test]
fn samples_later_in_the_day_never_show_more_time() -> anyhow::Result<()> {
    let clock = ManualClock::from_naive(wall((2025, 7, 4), 0, 0, 0)?);
    let day = clock.peek().date_naive();
    let mut last = remaining_until_end_of_day(&clock.now());

    while clock.peek().date_naive() == day {
        let next = remaining_until_end_of_day(&clock.now());
        assert!(next <= last);
        last = next;
        clock.advance(TimeDelta::minutes(17) + TimeDelta::milliseconds(333));
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn configured_ticker_stops_with_its_handle() -> anyhow::Result<()> {
    init_tracing();
    let config = CountdownConfig::from_toml_str("tick_period_ms = 1000")?;
    let clock = ManualClock::from_naive(wall((2025, 5, 9), 12, 0, 0)?);

    let frames: Arc<Mutex<Vec<RemainingDuration>>> = Arc::default();
    let sink = Arc::clone(&frames);
    let handle = spawn_ticker(
        CountdownClock::activate(clock.clone()),
        config.tick_period(),
        move |remaining| {
            if let Ok(mut frames) = sink.lock() {
                frames.push(remaining);
            }
        },
    );

    for _ in 0..5 {
        clock.advance_secs(1);
        tokio::time::advance(config.tick_period()).await;
        tokio::task::yield_now().await;
    }
    handle.stop();

    let rendered: Vec<String> = frames
        .lock()
        .map_err(|_| anyhow::anyhow!("frames lock poisoned"))?
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        vec!["11:59:59", "11:59:58", "11:59:57", "11:59:56", "11:59:55", "11:59:54"]
    );

    let samples = clock.samples();
    for _ in 0..3 {
        clock.advance_secs(1);
        tokio::time::advance(config.tick_period()).await;
        tokio::task::yield_now().await;
    }
    assert_eq!(clock.samples(), samples);
    Ok(())
}
