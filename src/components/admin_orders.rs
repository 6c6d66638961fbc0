//! Admin Order Board Components
//!
//! Order cards with a status selector and an estimated-time setter. Cards
//! patch themselves from the board store once the server accepts a change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_page;
use crate::models::{OrderCard, OrderStatus};
use crate::outcome;
use crate::store::{
    store_is_busy, store_set_busy, store_set_estimated_time, store_set_status, use_board_store,
    BoardStateStoreFields,
};
use crate::validate;

/// Every order currently on the board.
#[component]
pub fn OrderBoard(#[prop(optional, into)] empty_text: Option<String>) -> impl IntoView {
    let store = use_board_store();
    let orders = store.orders().read_untracked().clone();

    if orders.is_empty() {
        let text = empty_text.unwrap_or_else(|| "No orders yet.".to_string());
        return view! { <p class="empty-state">{text}</p> }.into_any();
    }

    view! {
        <div class="orders-grid reveal-grid">
            {orders.into_iter().map(|order| view! { <OrderCardView order=order /> }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn OrderCardView(order: OrderCard) -> impl IntoView {
    let ctx = use_page();
    let store = use_board_store();
    let id = order.order_id.clone();

    let status = {
        let id = id.clone();
        Memo::new(move |_| {
            store.orders().read().iter()
                .find(|o| o.order_id == id)
                .map(|o| o.status)
                .unwrap_or(order.status)
        })
    };
    let eta = {
        let id = id.clone();
        Memo::new(move |_| {
            store.orders().read().iter()
                .find(|o| o.order_id == id)
                .and_then(|o| o.estimated_time_minutes)
        })
    };
    let busy = {
        let id = id.clone();
        Memo::new(move |_| store_is_busy(&store, &id))
    };
    let time_input = RwSignal::new(
        order.estimated_time_minutes.map(|m| m.to_string()).unwrap_or_default(),
    );
    let saving_time = RwSignal::new(false);

    let on_status_change = {
        let id = id.clone();
        move |ev: web_sys::Event| {
            let Some(new_status) = OrderStatus::parse(&event_target_value(&ev)) else {
                return;
            };
            let id = id.clone();
            store_set_busy(&store, &id, true);
            let api = ctx.api();
            spawn_local(async move {
                let result = api.update_order_status(&id, new_status).await;
                store_set_busy(&store, &id, false);
                let outcome = outcome::status_updated(new_status, result);
                if outcome.succeeded() {
                    store_set_status(&store, &id, new_status);
                }
                ctx.render(&outcome);
            });
        }
    };

    let on_set_time = {
        let id = id.clone();
        move |_| {
            let minutes = match validate::estimated_minutes(&time_input.get_untracked()) {
                Ok(m) => m,
                Err(e) => {
                    ctx.toaster.error(e.to_string());
                    return;
                }
            };
            let id = id.clone();
            saving_time.set(true);
            store_set_busy(&store, &id, true);
            let api = ctx.api();
            spawn_local(async move {
                let result = api.set_estimated_time(&id, minutes).await;
                saving_time.try_set(false);
                store_set_busy(&store, &id, false);
                let outcome = outcome::time_set(minutes, result);
                if outcome.succeeded() {
                    store_set_estimated_time(&store, &id, minutes);
                }
                ctx.render(&outcome);
            });
        }
    };

    let customer = order.customer_name.map(|name| view! { <p><strong>"Customer: "</strong>{name}</p> });
    let address = order
        .delivery_address
        .map(|addr| view! { <p><strong>"Address: "</strong>{addr}</p> });
    let lines = order
        .items
        .into_iter()
        .map(|line| view! { <li>{format!("{} x {}", line.name, line.quantity)}</li> })
        .collect_view();

    view! {
        <div class="order-card" class:order-card-updating=move || busy.get() data-order-id=id.clone()>
            <div class="order-header">
                <h4>{format!("Order #{}", id)}</h4>
                <span
                    class="order-status"
                    style:background-color=move || status.get().badge_color()
                >
                    {move || status.get().pretty()}
                </span>
            </div>
            {customer}
            {address}
            <ul class="order-items">{lines}</ul>
            <p><strong>"Total: "</strong>{format!("₹{:.2}", order.total_amount)}</p>
            <div class="order-footer">
                <Show when=move || eta.get().is_some()>
                    <p>
                        <strong>"Estimated Time: "</strong>
                        <span>{move || eta.get().map(|m| format!("{m} minutes")).unwrap_or_default()}</span>
                    </p>
                </Show>
                <div class="order-actions">
                    <select
                        id=format!("statusSelect_{id}")
                        disabled=move || busy.get()
                        on:change=on_status_change
                    >
                        {OrderStatus::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option value=s.as_str() selected=move || status.get() == s>
                                        {s.pretty()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        id=format!("timeInput_{id}")
                        type="number"
                        min="1"
                        placeholder="Minutes"
                        prop:value=move || time_input.get()
                        on:input=move |ev| time_input.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="btn btn-secondary set-time-btn"
                        disabled=move || saving_time.get()
                        on:click=on_set_time
                    >
                        {move || if saving_time.get() { "Saving..." } else { "Set Time" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
