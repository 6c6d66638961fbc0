//! Runtime Configuration
//!
//! Read from the optional `window.__FOOD_DELIVERY_CONFIG__` object. Every
//! field has a default, so pages work without any configuration at all.

use serde::Deserialize;
use tracing::Level;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

const CONFIG_GLOBAL: &str = "__FOOD_DELIVERY_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Backend origin. None means the page's own origin.
    pub api_base: Option<String>,
    pub log_level: String,
    /// Overrides every page's toast clear delay.
    pub toast_timeout_ms: Option<u32>,
    /// Name shown in the checkout widget for food orders.
    pub store_name: String,
    pub subscription_name: String,
    pub subscription_description: String,
    pub widget_theme_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            log_level: "info".to_string(),
            toast_timeout_ms: None,
            store_name: "Food Delivery App".to_string(),
            subscription_name: "Food Delivery - Admin Subscription".to_string(),
            subscription_description: "Admin monthly subscription".to_string(),
            widget_theme_color: "#3399cc".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the page global; absent global gives the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{e:?}")))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        let json = js_sys::JSON::stringify(&raw)
            .map_err(|e| ConfigError::Invalid(format!("{e:?}")))?;
        Self::from_json(&String::from(json))
    }

    /// Parse the global's JSON form; unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// API base with no trailing slash.
    pub fn api_base_or(&self, origin: &str) -> String {
        self.api_base
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(origin)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn toast_timeout(&self, page_default: u32) -> u32 {
        self.toast_timeout_ms.unwrap_or(page_default)
    }
}
