//! Food Delivery Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod flow;
mod logging;
mod models;
mod outcome;
mod page;
mod store;
mod theme;
mod toast;
mod validate;
mod widget;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use page::Page;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[CONFIG] {e}, using defaults").into());
        AppConfig::default()
    });
    logging::init(config.level());
    theme::force_light_theme();

    let attr = browser::page_attr();
    match attr.as_deref().and_then(Page::from_attr) {
        Some(page) => mount(page, config),
        None => tracing::debug!(page = ?attr, "no interactive page, effects only"),
    }

    init_effects();
}

fn mount(page: Page, config: AppConfig) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match root {
        Some(root) => mount_to(root, move || view! { <App page=page config=config /> }).forget(),
        None => mount_to_body(move || view! { <App page=page config=config /> }),
    }
    tracing::info!(?page, "page mounted");
}

/// Decorations over the server-rendered markup as well as mounted views.
fn init_effects() {
    page_effects::reveal_on_scroll(".reveal, .reveal-grid > *", "revealed", 0.18);
    page_effects::init_counters("[data-counter]", 0.35);
    page_effects::rotate_testimonials(".testimonial", 6000);

    let cta = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("browseMenuCta"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(cta) = cta {
        page_effects::bind_pressed(&cta);
    }
}
