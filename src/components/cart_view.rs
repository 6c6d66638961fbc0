//! Cart Page Component
//!
//! Quantity changes and removals go to the server, then the page reloads
//! to show the new totals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::delete_confirm_button::DeleteConfirmButton;
use crate::browser;
use crate::context::{use_page, PageContext};
use crate::flow;
use crate::models::{CartLine, CartPageData};
use crate::outcome;

fn remove_line(ctx: PageContext, cart_item_id: u64) {
    let api = ctx.api();
    spawn_local(async move {
        ctx.render(&outcome::cart_removed(api.remove_from_cart(cart_item_id).await));
    });
}

fn change_quantity(ctx: PageContext, cart_item_id: u64, quantity: u32) {
    let api = ctx.api();
    spawn_local(async move {
        let confirm = || browser::confirm("Remove item from cart?");
        if let Some(outcome) = flow::change_quantity(&api, cart_item_id, quantity, confirm).await {
            ctx.render(&outcome);
        }
    });
}

#[component]
pub fn CartPage() -> impl IntoView {
    let data: CartPageData = browser::page_data();
    let total = data.total();

    if data.lines.is_empty() {
        return view! {
            <div class="cart-empty">
                <p>"Your cart is empty."</p>
                <a href="/user/menu" class="btn btn-primary">"Browse Menu"</a>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="cart-page">
            <div class="cart-items">
                {data.lines.into_iter().map(|line| view! { <CartRow line=line /> }).collect_view()}
            </div>
            <div class="cart-summary">
                <span>"Total: "</span>
                <strong>{format!("₹{total:.2}")}</strong>
                <a href="/user/checkout" class="btn btn-primary">"Proceed to Checkout"</a>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let ctx = use_page();
    let CartLine { cart_item_id, name, price, quantity } = line;

    view! {
        <div class="cart-item" data-cart-item-id=cart_item_id.to_string()>
            <div class="cart-item-info">
                <h4>{name}</h4>
                <span class="price">{format!("₹{price:.2}")}</span>
            </div>
            <div class="quantity-controls">
                <button
                    type="button"
                    class="qty-btn"
                    on:click=move |_| change_quantity(ctx, cart_item_id, quantity.saturating_sub(1))
                >
                    "−"
                </button>
                <span class="quantity">{quantity}</span>
                <button
                    type="button"
                    class="qty-btn"
                    on:click=move |_| change_quantity(ctx, cart_item_id, quantity + 1)
                >
                    "+"
                </button>
            </div>
            <span class="line-total">{format!("₹{:.2}", price * quantity as f64)}</span>
            <DeleteConfirmButton
                button_class="btn btn-danger remove-btn"
                label="Remove"
                prompt="Remove?"
                on_confirm=move |_| remove_line(ctx, cart_item_id)
            />
        </div>
    }
}
