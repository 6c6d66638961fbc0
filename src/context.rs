//! Page Context
//!
//! Handles shared by every component on a page, provided once by the root
//! component via the Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::config::AppConfig;
use crate::outcome::Outcome;
use crate::page::Page;
use crate::toast::Toaster;

#[derive(Clone, Copy)]
pub struct PageContext {
    pub page: Page,
    pub toaster: Toaster,
    api: StoredValue<ApiClient, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl PageContext {
    pub fn new(page: Page, config: AppConfig, api: ApiClient) -> Self {
        let timeout = config.toast_timeout(page.toast_timeout_ms());
        Self {
            page,
            toaster: Toaster::new(timeout),
            api: StoredValue::new_local(api),
            config: StoredValue::new(config),
        }
    }

    /// Owned client for use inside a spawned future.
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Show the outcome's toast, then carry out its effect.
    pub fn render(&self, outcome: &Outcome) {
        if let Some(toast) = &outcome.toast {
            self.toaster.show(toast.clone());
        }
        browser::apply(&outcome.effect);
    }
}

pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}
