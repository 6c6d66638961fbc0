//! Browser Helpers
//!
//! Thin wrappers over `window`/`document` used by every page: navigation,
//! confirmation dialogs and the server-rendered bootstrap data.

use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::outcome::Effect;

const PAGE_DATA_ID: &str = "page-data";

pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// `<body data-page="...">`.
pub fn page_attr() -> Option<String> {
    web_sys::window()?.document()?.body()?.get_attribute("data-page")
}

/// Decode the `#page-data` JSON block. Missing or malformed data gives the
/// type's default so the page still renders.
pub fn page_data<T: DeserializeOwned + Default>() -> T {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PAGE_DATA_ID))
        .and_then(|el| el.text_content());
    let Some(text) = text else {
        return T::default();
    };
    match serde_json::from_str(&text) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "unreadable page data");
            T::default()
        }
    }
}

pub fn navigate(href: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(href) {
        tracing::error!(?e, href, "navigation failed");
    }
}

pub fn reload() {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().reload() {
        tracing::error!(?e, "reload failed");
    }
}

fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    if delay_ms == 0 {
        f();
    } else {
        Timeout::new(delay_ms, f).forget();
    }
}

/// Carry out a navigation effect, honouring its delay.
pub fn apply(effect: &Effect) {
    match effect {
        Effect::Stay => {}
        Effect::Navigate { href, delay_ms } => {
            let href = href.clone();
            tracing::debug!(%href, delay_ms, "navigating");
            after(*delay_ms, move || navigate(&href));
        }
        Effect::Reload { delay_ms } => after(*delay_ms, reload),
    }
}

/// `window.confirm`; false when no dialog could be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Smoothly scroll so `el` sits 80px below the top of the viewport.
pub fn scroll_near(el: &Element) {
    let Some(window) = web_sys::window() else { return };
    let offset = el.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0) - 80.0;
    let opts = ScrollToOptions::new();
    opts.set_top(offset.max(0.0));
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Lock or restore page scrolling behind a modal.
pub fn lock_scroll(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        if let Err(e) = body.style().set_property("overflow", value) {
            tracing::debug!(?e, locked, "could not set body overflow");
        }
    }
}
