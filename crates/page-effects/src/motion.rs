//! Motion preferences and feature detection.

use wasm_bindgen::JsValue;

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn is_touch_device() -> bool {
    supports("ontouchstart")
}

/// Whether `window` has a property called `name` (feature detection).
pub fn supports(name: &str) -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}
