//! A hello for developers who open the console.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::content::STORE_URL;

const ASCII_LOGO: &str = r#"
  __  __             _      _____
 |  \/  | ___  _ __ | | __ |  ___|__   ___ _   _ ___
 | |\/| |/ _ \| '_ \| |/ / | |_ / _ \ / __| | | / __|
 | |  | | (_) | | | |   <  |  _| (_) | (__| |_| \__ \
 |_|  |_|\___/|_| |_|_|\_\ |_|  \___/ \___|\__,_|___/

  Master your time like a monk.
"#;

#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        print_console_art();
    });

    view! {}
}

fn print_console_art() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{ASCII_LOGO}")),
        &JsValue::from_str("color: #a78bfa; font-family: monospace; font-size: 11px;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str("%c(-_-) [focus] The dial counts down to local midnight."),
        &JsValue::from_str("color: #22d3ee;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c(^_^) [install] {STORE_URL}")),
        &JsValue::from_str("color: #f472b6;"),
    );
}
