//! Admin Subscription Payment Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_page, PageContext};
use crate::flow;
use crate::models::PaymentOrder;
use crate::outcome;
use crate::widget::{self, CheckoutOptions};

#[component]
pub fn AdminPay() -> impl IntoView {
    let ctx = use_page();
    let busy = RwSignal::new(false);

    let start = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        ctx.toaster.show(outcome::admin_pay_pending());
        let api = ctx.api();
        spawn_local(async move {
            match api.create_subscription_order().await {
                Ok(order) => open_subscription_widget(ctx, order),
                Err(e) => ctx.render(&outcome::admin_pay_start_failed(&e)),
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="admin-pay">
            <p>"Activate your admin subscription to manage orders and menu items."</p>
            <button
                id="adminPayBtn"
                type="button"
                class="btn btn-primary"
                disabled=move || busy.get()
                on:click=start
            >
                "Pay Subscription"
            </button>
        </div>
    }
}

fn open_subscription_widget(ctx: PageContext, order: PaymentOrder) {
    let config = ctx.config();
    let options = CheckoutOptions::for_order(&order, config.subscription_name)
        .with_description(config.subscription_description)
        .with_theme_color(config.widget_theme_color);
    let app_order_id = order.app_order_id;

    let opened = widget::open_checkout(&options, move |paid| {
        let api = ctx.api();
        spawn_local(async move {
            let settled =
                flow::settle_payment(&api, paid, app_order_id, outcome::admin_pay_verified).await;
            ctx.render(&settled);
        });
    });
    if let Err(e) = opened {
        ctx.render(&outcome::admin_pay_start_failed(&e));
    }
}
