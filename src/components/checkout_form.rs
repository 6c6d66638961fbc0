//! Checkout Form Component
//!
//! Creates the order from the cart, opens the payment widget and verifies
//! the widget's result before leaving the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form_field::FormTextArea;
use crate::context::{use_page, PageContext};
use crate::flow;
use crate::models::PaymentOrder;
use crate::outcome;
use crate::widget::{self, CheckoutOptions};

#[component]
pub fn CheckoutForm() -> impl IntoView {
    let ctx = use_page();
    let address = RwSignal::new(String::new());
    let instructions = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (delivery, notes) = (address.get_untracked(), instructions.get_untracked());
        busy.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match flow::prepare_checkout(&api, &delivery, &notes, |o| ctx.render(o)).await {
                Ok(Some(payment)) => open_widget(ctx, payment),
                Ok(None) => {}
                Err(e) => ctx.toaster.error(e.to_string()),
            }
            busy.try_set(false);
        });
    };

    view! {
        <form id="checkoutForm" class="checkout-form" on:submit=on_submit>
            <FormTextArea id="deliveryAddress" label="Delivery Address" value=address />
            <FormTextArea
                id="specialInstructions"
                label="Special Instructions"
                value=instructions
                placeholder="Optional"
                rows=2
            />
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() { "Placing order..." } else { "Place Order & Pay" }}
            </button>
        </form>
    }
}

fn open_widget(ctx: PageContext, payment: PaymentOrder) {
    let options = CheckoutOptions::for_order(&payment, ctx.config().store_name);
    let app_order_id = payment.app_order_id;
    let opened = widget::open_checkout(&options, move |paid| {
        let api = ctx.api();
        spawn_local(async move {
            let settled =
                flow::settle_payment(&api, paid, app_order_id, outcome::payment_verified).await;
            ctx.render(&settled);
        });
    });
    if let Err(e) = opened {
        ctx.render(&outcome::checkout_failed(&e, "Checkout failed"));
    }
}
