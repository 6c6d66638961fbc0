//! Checkout Widget
//!
//! Binding to the payment provider's global `Razorpay` constructor, loaded
//! by the page through its own script tag.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::ApiError;
use crate::models::{PaymentOrder, WidgetPayment};

const WIDGET_GLOBAL: &str = "Razorpay";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Razorpay)]
    type CheckoutWidget;

    #[wasm_bindgen(constructor, catch, js_class = "Razorpay")]
    fn new(options: &JsValue) -> Result<CheckoutWidget, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Razorpay")]
    fn open(this: &CheckoutWidget) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetTheme {
    pub color: String,
}

/// Options object passed to the constructor, minus `handler`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutOptions {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<WidgetTheme>,
}

impl CheckoutOptions {
    pub fn for_order(order: &PaymentOrder, name: impl Into<String>) -> Self {
        Self {
            key: order.razorpay_key_id.clone(),
            amount: order.amount_in_paise,
            currency: order.currency.clone(),
            name: name.into(),
            description: None,
            order_id: order.razorpay_order_id.clone(),
            theme: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme = Some(WidgetTheme { color: color.into() });
        self
    }
}

fn js_error(context: &str, err: JsValue) -> ApiError {
    let detail = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    ApiError::Widget(format!("{context}: {detail}"))
}

/// Open the widget. `on_paid` runs once, when the provider reports a
/// completed payment.
pub fn open_checkout(
    options: &CheckoutOptions,
    on_paid: impl FnOnce(Result<WidgetPayment, ApiError>) + 'static,
) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Widget("no window".into()))?;
    let present = Reflect::has(&window, &JsValue::from_str(WIDGET_GLOBAL)).unwrap_or(false);
    if !present {
        return Err(ApiError::Widget(format!("{WIDGET_GLOBAL} is not defined")));
    }

    let js_options = serde_wasm_bindgen::to_value(options)
        .map_err(|e| ApiError::Widget(format!("bad checkout options: {e}")))?;
    let handler = Closure::once_into_js(move |response: JsValue| {
        let paid = serde_wasm_bindgen::from_value::<WidgetPayment>(response)
            .map_err(|e| ApiError::Widget(format!("unreadable payment response: {e}")));
        on_paid(paid);
    });
    Reflect::set(&js_options, &JsValue::from_str("handler"), &handler)
        .map_err(|e| js_error("could not attach handler", e))?;

    let widget = CheckoutWidget::new(&js_options).map_err(|e| js_error("could not start checkout", e))?;
    tracing::info!(order_id = %options.order_id, amount = options.amount, "opening checkout widget");
    widget.open().map_err(|e| js_error("could not open checkout", e))
}
