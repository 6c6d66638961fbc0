//! Toast Host Component
//!
//! Renders a page's toast slot, either floating in the corner or inline in
//! a form.

use leptos::prelude::*;

use crate::context::use_page;
use crate::toast::Toaster;

/// Fixed-position toast for the current page.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_page();
    let slot = ctx.toaster.slot();
    let inset = ctx.page.placement().inset_px();
    let style = format!(
        "position: fixed; top: {inset}px; right: {inset}px; z-index: 2000; min-width: 220px;"
    );

    view! {
        <div
            id=ctx.page.toast_id()
            class=move || slot.with(|s| s.class_name())
            style=style
            role="status"
            aria-live="polite"
        >
            {move || slot.with(|s| s.text())}
        </div>
    }
}

/// The `#message` block inside auth forms.
#[component]
pub fn InlineMessage(
    toaster: Toaster,
    #[prop(optional)] node_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    let slot = toaster.slot();
    view! {
        <div
            id="message"
            node_ref=node_ref
            class=move || slot.with(|s| s.class_name())
        >
            {move || slot.with(|s| s.text())}
        </div>
    }
}
