//! Pressed-state microinteraction for call-to-action buttons.

use gloo_timers::callback::Timeout;

use crate::{listen, set_class, supports};

pub const PRESSED_CLASS: &str = "hero-cta-pressed";

/// Space or Enter, across old and new `key` values.
pub fn is_activation_key(key: &str, code: &str) -> bool {
    matches!(key, " " | "Spacebar" | "Enter") || code == "Space"
}

pub fn bind_pressed(cta: &web_sys::HtmlElement) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (down, ups): (&str, &[&str]) = if supports("PointerEvent") {
        ("pointerdown", &["pointerup"])
    } else {
        ("mousedown", &["mouseup", "touchend"])
    };

    let target = cta.clone();
    listen(cta, down, move |_: web_sys::Event| {
        set_class(&target, PRESSED_CLASS, true);
    });
    for up in ups {
        let target = cta.clone();
        listen(&doc, up, move |_: web_sys::Event| {
            set_class(&target, PRESSED_CLASS, false);
        });
    }

    let target = cta.clone();
    listen(cta, "keydown", move |ev: web_sys::KeyboardEvent| {
        if is_activation_key(&ev.key(), &ev.code()) {
            set_class(&target, PRESSED_CLASS, true);
            let released = target.clone();
            Timeout::new(140, move || {
                set_class(&released, PRESSED_CLASS, false);
            })
            .forget();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key(" ", ""));
        assert!(is_activation_key("Spacebar", ""));
        assert!(is_activation_key("Unidentified", "Space"));
        assert!(is_activation_key("Enter", "Enter"));
        assert!(!is_activation_key("a", "KeyA"));
    }
}
