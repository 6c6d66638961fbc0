//! Testimonial carousel.

use std::cell::Cell;

use gloo_timers::callback::Interval;

use crate::{prefers_reduced_motion, query_all, set_class};

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

fn show_only(items: &[web_sys::Element], active: usize) {
    for (i, item) in items.iter().enumerate() {
        set_class(item, "active", i == active);
    }
}

/// Cycle the `active` class through `item_selector` every `period_ms`.
pub fn rotate_testimonials(item_selector: &str, period_ms: u32) {
    let items = query_all(item_selector);
    match items.len() {
        0 => return,
        1 => {
            set_class(&items[0], "active", true);
            return;
        }
        _ => {}
    }
    show_only(&items, 0);
    if prefers_reduced_motion() {
        return;
    }
    let index = Cell::new(0usize);
    Interval::new(period_ms, move || {
        let next = next_index(index.get(), items.len());
        index.set(next);
        show_only(&items, next);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(5, 0), 0);
    }
}
