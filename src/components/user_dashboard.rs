//! User Dashboard Component

use leptos::prelude::*;

use super::cart_button::CartBadge;
use super::menu_view::MenuItemCard;
use crate::browser;
use crate::models::UserDashboardData;

#[component]
pub fn UserDashboard() -> impl IntoView {
    let data: UserDashboardData = browser::page_data();
    let cart_count = RwSignal::new(data.cart_count);
    let greeting = if data.full_name.is_empty() {
        "Welcome back!".to_string()
    } else {
        format!("Welcome back, {}!", data.full_name)
    };

    view! {
        <div class="user-dashboard">
            <section class="dashboard-hero reveal">
                <h2>{greeting}</h2>
                <CartBadge cart_count=cart_count />
                <a id="browseMenuCta" href="/user/menu" class="btn btn-primary hero-cta">"Browse Menu"</a>
            </section>

            <section class="dashboard-stats-card reveal">
                <div class="dashboard-stat">
                    <span class="dashboard-stat-number" data-counter=data.order_count.to_string()>"0"</span>
                    <span class="dashboard-stat-label">"Orders placed"</span>
                </div>
                <div class="dashboard-stat">
                    <span class="dashboard-stat-number">{move || cart_count.get()}</span>
                    <span class="dashboard-stat-label">"Items in cart"</span>
                </div>
            </section>

            <section class="featured">
                <h3>"Featured today"</h3>
                <div class="menu-grid reveal-grid">
                    {data
                        .featured
                        .into_iter()
                        .map(|item| view! { <MenuItemCard item=item cart_count=cart_count /> })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials reveal">
                {data
                    .testimonials
                    .into_iter()
                    .enumerate()
                    .map(|(i, t)| {
                        view! {
                            <blockquote class="testimonial" class:active={i == 0}>
                                <p>{t.quote}</p>
                                <cite>{t.author}</cite>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
