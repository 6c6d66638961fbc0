//! Pointer tilt for the hero card.

use gloo_timers::callback::Timeout;

use crate::{is_touch_device, listen, prefers_reduced_motion, set_style, supports};

/// Maximum tilt in degrees.
pub const HERO_TILT_DEG: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&web_sys::DomRect> for Bounds {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// (rotateX, rotateY) in degrees for a pointer at `(x, y)`.
/// Returns None for an element with no area.
pub fn tilt_angles(x: f64, y: f64, bounds: Bounds, strength: f64) -> Option<(f64, f64)> {
    if bounds.width == 0.0 || bounds.height == 0.0 {
        return None;
    }
    let nx = (x - bounds.left) / bounds.width - 0.5;
    let ny = (y - bounds.top) / bounds.height - 0.5;
    // + 0.0 turns -0 into 0
    Some((-ny * strength + 0.0, nx * strength + 0.0))
}

pub fn tilt_transform((rx, ry): (f64, f64)) -> String {
    format!("perspective(900px) rotateX({rx:.2}deg) rotateY({ry:.2}deg) translateZ(6px)")
}

/// Tilt `card` toward the pointer. Skipped on touch devices and reduced motion.
pub fn bind_tilt(card: &web_sys::HtmlElement, strength: f64) {
    if prefers_reduced_motion() || is_touch_device() {
        return;
    }
    set_style(card, "transform-origin", "center");
    set_style(card, "will-change", "transform");

    let move_event = if supports("PointerEvent") { "pointermove" } else { "mousemove" };

    let target = card.clone();
    listen(card, move_event, move |ev: web_sys::MouseEvent| {
        let bounds = Bounds::from(&target.get_bounding_client_rect());
        if let Some(angles) = tilt_angles(ev.client_x() as f64, ev.client_y() as f64, bounds, strength) {
            set_style(&target, "transform", &tilt_transform(angles));
        }
    });

    let target = card.clone();
    listen(card, "mouseenter", move |_: web_sys::MouseEvent| {
        set_style(&target, "transition", "transform 160ms ease");
    });

    for leave in ["mouseleave", "pointerleave"] {
        let target = card.clone();
        listen(card, leave, move |_: web_sys::MouseEvent| {
            set_style(&target, "transform", "");
            set_style(&target, "transition", "transform 260ms cubic-bezier(.2,.9,.3,1)");
            let settled = target.clone();
            Timeout::new(300, move || set_style(&settled, "transition", "")).forget();
        });
    }
}
