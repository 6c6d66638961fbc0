//! Buttons that lean toward the pointer.

use crate::{listen, set_style, Bounds};

const PULL: f64 = 0.15;

/// Offset in px for a pointer at `(x, y)` over `bounds`.
pub fn magnetic_offset(x: f64, y: f64, bounds: Bounds) -> (f64, f64) {
    let dx = x - bounds.left - bounds.width / 2.0;
    let dy = y - bounds.top - bounds.height / 2.0;
    (dx * PULL, dy * PULL)
}

pub fn bind_magnetic(button: &web_sys::HtmlElement) {
    let target = button.clone();
    listen(button, "mousemove", move |ev: web_sys::MouseEvent| {
        let bounds = Bounds::from(&target.get_bounding_client_rect());
        let (x, y) = magnetic_offset(ev.client_x() as f64, ev.client_y() as f64, bounds);
        set_style(&target, "transform", &format!("translate({x}px, {y}px)"));
    });

    let target = button.clone();
    listen(button, "mouseleave", move |_: web_sys::MouseEvent| {
        set_style(&target, "transform", "");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_scales_distance_from_centre() {
        let bounds = Bounds { left: 0.0, top: 0.0, width: 100.0, height: 40.0 };
        assert_eq!(magnetic_offset(50.0, 20.0, bounds), (0.0, 0.0));
        assert_eq!(magnetic_offset(100.0, 0.0, bounds), (7.5, -3.0));
    }
}
