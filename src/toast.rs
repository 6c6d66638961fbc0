//! Toast Notifications
//!
//! A page has one toast slot. Showing a toast replaces whatever is there and
//! schedules a clear; a clear scheduled by an older toast never removes a
//! newer one.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Current toast plus a generation counter standing in for `clearTimeout`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

impl ToastSlot {
    /// Show `toast`, returning the generation its clear must present.
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.generation += 1;
        self.current = Some(toast);
        self.generation
    }

    /// Clear the slot if nothing newer than `generation` was shown.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn text(&self) -> String {
        self.current().map(|t| t.message.clone()).unwrap_or_default()
    }

    /// `message success` / `message error`, or bare `message` when empty.
    pub fn class_name(&self) -> String {
        match self.current() {
            Some(t) => format!("message {}", t.kind.as_str()),
            None => "message".to_string(),
        }
    }
}

/// Reactive handle to a toast slot with a fixed clear delay.
#[derive(Clone, Copy)]
pub struct Toaster {
    slot: RwSignal<ToastSlot>,
    timeout_ms: u32,
}

impl Toaster {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::default()),
            timeout_ms,
        }
    }

    pub fn show(&self, toast: Toast) {
        if toast.is_error() {
            tracing::debug!(message = %toast.message, "error toast");
        }
        let Some(generation) = self.slot.try_update(|s| s.show(toast)) else {
            return;
        };
        let slot = self.slot;
        Timeout::new(self.timeout_ms, move || {
            slot.try_update(|s| s.expire(generation));
        })
        .forget();
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast::error(message));
    }

    pub fn slot(&self) -> RwSignal<ToastSlot> {
        self.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_clears_text_and_class() {
        let mut slot = ToastSlot::default();
        let gen = slot.show(Toast::error("Please enter delivery address"));
        assert_eq!(slot.text(), "Please enter delivery address");
        assert_eq!(slot.class_name(), "message error");

        assert!(slot.expire(gen));
        assert_eq!(slot.text(), "");
        assert_eq!(slot.class_name(), "message");
    }

    #[test]
    fn test_stale_timer_keeps_newer_toast() {
        let mut slot = ToastSlot::default();
        let first = slot.show(Toast::success("Item added to cart!"));
        let second = slot.show(Toast::error("Out of stock"));

        assert!(!slot.expire(first));
        assert_eq!(slot.text(), "Out of stock");

        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_expire_twice_is_harmless() {
        let mut slot = ToastSlot::default();
        let gen = slot.show(Toast::success("OTP sent to your email"));
        assert!(slot.expire(gen));
        assert!(!slot.expire(gen));
    }
}
