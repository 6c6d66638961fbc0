//! Menu Page Component
//!
//! Search box plus the item grid rendered from page data.

use leptos::prelude::*;

use super::cart_button::{AddToCartButton, CartBadge};
use crate::browser;
use crate::context::use_page;
use crate::models::{FoodItem, MenuPageData};
use crate::outcome;
use crate::validate;

#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = use_page();
    let data: MenuPageData = browser::page_data();
    let cart_count = RwSignal::new(data.cart_count);
    let query = RwSignal::new(data.search.clone().unwrap_or_default());

    let search = move || match validate::search_query(&query.get_untracked()) {
        Ok(q) => ctx.render(&outcome::menu_search(&q)),
        Err(e) => ctx.toaster.error(e.to_string()),
    };

    let empty = data.items.is_empty();
    let heading = match data.search.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => format!("Results for \"{s}\""),
        None => "Our Menu".to_string(),
    };

    view! {
        <div class="menu-page">
            <div class="menu-header">
                <h2>{heading}</h2>
                <CartBadge cart_count=cart_count />
            </div>
            <div class="search-bar">
                <input
                    id="searchInput"
                    type="text"
                    placeholder="Search dishes..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            search();
                        }
                    }
                />
                <button type="button" class="btn btn-primary" on:click=move |_| search()>
                    "Search"
                </button>
            </div>
            <Show when=move || empty>
                <p class="empty-state">"No items found."</p>
            </Show>
            <div class="menu-grid reveal-grid">
                {data.items.into_iter().map(|item| view! { <MenuItemCard item=item cart_count=cart_count /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn MenuItemCard(item: FoodItem, cart_count: RwSignal<u32>) -> impl IntoView {
    let image = (!item.image_url.is_empty()).then(|| {
        view! { <img class="menu-item-image" src=item.image_url alt=item.name.clone() loading="lazy" /> }
    });
    view! {
        <div class="menu-item" data-item-id=item.id.to_string()>
            {image}
            <div class="menu-item-body">
                <h3>{item.name}</h3>
                <span class="menu-item-category">{item.category}</span>
                <p>{item.description}</p>
                <div class="menu-item-footer">
                    <span class="price">{format!("₹{:.2}", item.price)}</span>
                    <AddToCartButton item_id=item.id cart_count=cart_count />
                </div>
            </div>
        </div>
    }
}
