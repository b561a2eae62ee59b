//! "Time remaining today" dial in the hero.
//!
//! The interval handle belongs to this component: it is acquired on mount and
//! cleared in `on_cleanup`. The tick callback only reaches the countdown
//! through a `StoredValue`, so once the owner is gone (or the countdown is
//! stopped) a late tick does nothing.

use leptos::prelude::*;
use monk_countdown::{CountdownClock, CountdownConfig, SystemClock};
use wasm_bindgen::JsValue;

const EMBEDDED_CONFIG: &str = include_str!("../../countdown.toml");

/// Embedded config, or defaults if it does not validate.
fn load_config() -> CountdownConfig {
    match CountdownConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "[monk-focus][warn] countdown.toml rejected ({e}); using defaults"
            )));
            CountdownConfig::default()
        }
    }
}

#[component]
pub fn CountdownDial() -> impl IntoView {
    let config = load_config();

    // Sampled before the first render, so the dial never flashes blank.
    let countdown = CountdownClock::activate(SystemClock);
    let (remaining, set_remaining) = signal(countdown.display());
    let countdown = StoredValue::new(countdown);

    let timer = set_interval_with_handle(
        move || {
            if let Some(Some(next)) = countdown.try_update_value(|c| c.tick()) {
                set_remaining.set(next.to_string());
            }
        },
        config.tick_period(),
    );

    match timer {
        Ok(handle) => on_cleanup(move || {
            handle.clear();
            countdown.try_update_value(|c| c.deactivate());
        }),
        Err(err) => web_sys::console::warn_2(
            &JsValue::from_str("[monk-focus][warn] countdown timer unavailable:"),
            &err,
        ),
    }

    view! {
        <div class="clock-dial">
            <div class="clock-glow"></div>
            <div class="clock-face">
                <p class="clock-label">"TIME REMAINING TODAY"</p>
                <p class="clock-digits">{move || remaining.get()}</p>
                <p class="clock-units">"HOURS : MINUTES : SECONDS"</p>
                <div class="clock-ring ring-outer"></div>
                <div class="clock-ring ring-middle"></div>
                <div class="clock-ring ring-inner"></div>
            </div>
        </div>
    }
}
