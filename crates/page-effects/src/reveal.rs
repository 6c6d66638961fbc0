//! Scroll reveal via IntersectionObserver.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::{prefers_reduced_motion, query_all, set_class, supports};

/// Run `on_visible` once per element, the first time it is at least
/// `threshold` visible. Without IntersectionObserver every element fires
/// immediately.
pub fn observe_once<F>(elements: Vec<web_sys::Element>, threshold: f64, on_visible: F)
where
    F: Fn(&web_sys::Element) + 'static,
{
    if !supports("IntersectionObserver") {
        elements.iter().for_each(|el| on_visible(el));
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
        }
        Err(err) => tracing::warn!("IntersectionObserver unavailable: {err:?}"),
    }
    callback.forget();
}

/// Add `class` to every element matching `selector` as it scrolls into view.
pub fn reveal_on_scroll(selector: &str, class: &'static str, threshold: f64) {
    let targets = query_all(selector);
    if targets.is_empty() {
        return;
    }
    let reveal = move |el: &web_sys::Element| {
        set_class(el, class, true);
    };
    if prefers_reduced_motion() {
        targets.iter().for_each(reveal);
        return;
    }
    observe_once(targets, threshold, reveal);
}
