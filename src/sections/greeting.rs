//! Console greeting for developers who look under the hood.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::SITE_NAME;

#[component]
pub fn ConsoleGreeting() -> impl IntoView {
    Effect::new(move || greet());
    view! {}
}

fn greet() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{SITE_NAME} — flawless software, tested twice.")),
        &JsValue::from_str("color: #06b6d4; font-weight: bold;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cNeed a quote? info@ahtesters.com"),
        &JsValue::from_str("color: #888;"),
    );
}
