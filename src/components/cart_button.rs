//! Add To Cart Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_page;
use crate::outcome;

/// Adds one unit of `item_id`; `cart_count` is the navbar badge.
#[component]
pub fn AddToCartButton(item_id: u64, cart_count: RwSignal<u32>) -> impl IntoView {
    let ctx = use_page();
    let adding = RwSignal::new(false);

    let add = move |_| {
        if adding.get_untracked() {
            return;
        }
        adding.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.add_to_cart(item_id, 1).await;
            adding.try_set(false);
            let previous = cart_count.try_get_untracked().unwrap_or_default();
            let (outcome, badge) = outcome::cart_added(result, previous);
            if let Some(count) = badge {
                cart_count.try_set(count);
            }
            ctx.render(&outcome);
        });
    };

    view! {
        <button
            type="button"
            class="btn btn-primary add-to-cart-btn"
            data-item-id=item_id.to_string()
            disabled=move || adding.get()
            on:click=add
        >
            {move || if adding.get() { "Adding..." } else { "Add to Cart" }}
        </button>
    }
}

/// Navbar cart badge.
#[component]
pub fn CartBadge(cart_count: RwSignal<u32>) -> impl IntoView {
    view! {
        <a href="/user/cart" class="nav-cart-icon">
            "🛒 "
            <span id="cartCount" class="cart-count">{move || cart_count.get()}</span>
        </a>
    }
}
