//! Food Delivery Frontend App
//!
//! Root component: provides the page context, seeds the admin board store
//! from the server's page data, and mounts the component for the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::browser;
use crate::components::{
    AdminDashboard, AdminPay, AdminRegister, CartPage, CheckoutForm, FoodItemsPage, LandingHero,
    LoginForm, MenuPage, OrderBoard, ToastHost, UserDashboard, UserRegister,
};
use crate::config::AppConfig;
use crate::context::PageContext;
use crate::models::{AdminDashboardData, FoodItemsPageData, OrdersPageData, Role};
use crate::page::Page;
use crate::store::BoardState;

#[component]
pub fn App(page: Page, config: AppConfig) -> impl IntoView {
    let api = ApiClient::new(config.api_base_or(&browser::origin()));
    tracing::debug!(?page, base = api.base_url(), "mounting page");
    provide_context(PageContext::new(page, config, api));

    let body = match page {
        Page::Landing => view! { <LandingHero /> }.into_any(),
        Page::UserLogin => view! { <LoginForm role=Role::User /> }.into_any(),
        Page::UserRegister => view! { <UserRegister /> }.into_any(),
        Page::UserDashboard => view! { <UserDashboard /> }.into_any(),
        Page::Menu => view! { <MenuPage /> }.into_any(),
        Page::Cart => view! { <CartPage /> }.into_any(),
        Page::Checkout => view! { <CheckoutForm /> }.into_any(),
        Page::AdminLogin => view! { <LoginForm role=Role::Admin /> }.into_any(),
        Page::AdminRegister => view! { <AdminRegister /> }.into_any(),
        Page::AdminDashboard => {
            let data = browser::page_data::<AdminDashboardData>();
            provide_context(Store::new(BoardState::with_orders(data.recent_orders.clone())));
            view! { <AdminDashboard data=data /> }.into_any()
        }
        Page::AdminOrders => {
            let data = browser::page_data::<OrdersPageData>();
            provide_context(Store::new(BoardState::with_orders(data.orders)));
            view! { <OrderBoard empty_text="No orders yet." /> }.into_any()
        }
        Page::AdminFoodItems => {
            let data = browser::page_data::<FoodItemsPageData>();
            provide_context(Store::new(BoardState::with_items(data.items)));
            view! { <FoodItemsPage /> }.into_any()
        }
        Page::AdminPay => view! { <AdminPay /> }.into_any(),
    };

    view! {
        <Show when=move || page.floating_toast()>
            <ToastHost />
        </Show>
        {body}
    }
}
