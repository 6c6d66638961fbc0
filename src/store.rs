//! Admin Board Store
//!
//! Orders and menu items seeded from page data, patched in place as the
//! admin updates them. Uses reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FoodItem, OrderCard, OrderStatus};

#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    pub orders: Vec<OrderCard>,
    pub items: Vec<FoodItem>,
    /// Order ids with a request in flight.
    pub busy_orders: Vec<String>,
}

impl BoardState {
    pub fn with_orders(orders: Vec<OrderCard>) -> Self {
        Self { orders, ..Default::default() }
    }

    pub fn with_items(items: Vec<FoodItem>) -> Self {
        Self { items, ..Default::default() }
    }
}

fn patch_order(orders: &mut [OrderCard], order_id: &str, f: impl FnOnce(&mut OrderCard)) -> bool {
    orders.iter_mut().find(|o| o.order_id == order_id).map(f).is_some()
}

fn remove_item_from(items: &mut Vec<FoodItem>, item_id: u64) -> bool {
    let before = items.len();
    items.retain(|i| i.id != item_id);
    items.len() != before
}

pub type BoardStore = Store<BoardState>;

pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Returns false when no order has `order_id`.
pub fn store_set_status(store: &BoardStore, order_id: &str, status: OrderStatus) -> bool {
    patch_order(&mut store.orders().write(), order_id, |o| o.status = status)
}

pub fn store_set_estimated_time(store: &BoardStore, order_id: &str, minutes: u32) -> bool {
    patch_order(&mut store.orders().write(), order_id, |o| {
        o.estimated_time_minutes = Some(minutes)
    })
}

pub fn store_remove_item(store: &BoardStore, item_id: u64) -> bool {
    remove_item_from(&mut store.items().write(), item_id)
}

pub fn store_set_busy(store: &BoardStore, order_id: &str, busy: bool) {
    let busy_orders = store.busy_orders();
    let mut ids = busy_orders.write();
    ids.retain(|id| id != order_id);
    if busy {
        ids.push(order_id.to_string());
    }
}

pub fn store_is_busy(store: &BoardStore, order_id: &str) -> bool {
    store.busy_orders().read().iter().any(|id| id == order_id)
}
