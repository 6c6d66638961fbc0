//! Admin Dashboard Component

use leptos::prelude::*;

use super::admin_orders::OrderBoard;
use crate::models::AdminDashboardData;

#[component]
pub fn AdminDashboard(data: AdminDashboardData) -> impl IntoView {
    let stats = [
        ("Total Orders", data.total_orders, ""),
        ("Pending Orders", data.pending_orders, ""),
        ("Menu Items", data.total_items, ""),
        ("Revenue", data.revenue, "₹"),
    ];

    view! {
        <div class="admin-dashboard">
            <section class="dashboard-stats reveal-grid">
                {stats
                    .into_iter()
                    .map(|(label, value, prefix)| {
                        view! {
                            <div class="dashboard-stat">
                                <span class="dashboard-stat-prefix">{prefix}</span>
                                <span class="dashboard-stat-number" data-counter=value.to_string()>"0"</span>
                                <span class="dashboard-stat-label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="recent-orders">
                <h3>"Recent Orders"</h3>
                <OrderBoard empty_text="No recent orders." />
            </section>
        </div>
    }
}
