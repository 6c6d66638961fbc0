//! Page Effects
//!
//! Decorative, presentation-only behaviour for the food delivery pages:
//! scroll reveal, animated counters, pointer tilt, magnetic buttons,
//! pressed-CTA microstate and testimonial rotation.
//!
//! Every effect is a no-op when its target is missing. Effects that move
//! things honour `prefers-reduced-motion`.

mod counter;
mod magnetic;
mod motion;
mod pressed;
mod reveal;
mod rotation;
mod tilt;

pub use counter::{animate_counter, init_counters, parse_target, CounterAnimation, StatCounter};
pub use magnetic::{bind_magnetic, magnetic_offset};
pub use motion::{is_touch_device, prefers_reduced_motion, supports};
pub use pressed::{bind_pressed, is_activation_key, PRESSED_CLASS};
pub use reveal::{observe_once, reveal_on_scroll};
pub use rotation::{next_index, rotate_testimonials};
pub use tilt::{bind_tilt, tilt_angles, tilt_transform, Bounds, HERO_TILT_DEG};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Attach a listener that lives as long as the page.
pub(crate) fn listen<E, F>(target: &web_sys::EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handler(ev.unchecked_into::<E>());
    });
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        tracing::warn!("failed to bind {event}: {err:?}");
    }
    cb.forget();
}

/// All elements matching `selector` in the current document.
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub(crate) fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        tracing::debug!("failed to set {property}: {err:?}");
    }
}

/// Add or remove `class` on `el`.
pub(crate) fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        tracing::debug!("failed to toggle {class}: {err:?}");
    }
}
