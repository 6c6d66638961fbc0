//! Frontend Models
//!
//! Request and reply bodies for the backend endpoints, plus the page data
//! the server renders into `#page-data`.

use serde::{Deserialize, Serialize};

// ========================
// Shared
// ========================

/// Which side of the site a form belongs to. Sent as `type` on auth calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// `{success, message}` head shared by every envelope reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply with nothing beyond the envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Auth
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    pub password: String,
    #[serde(rename = "type")]
    pub role: Role,
}

impl LoginRequest {
    /// Request with no identifier set yet.
    pub fn new(password: impl Into<String>, role: Role) -> Self {
        Self {
            email: None,
            phone_number: None,
            admin_id: None,
            password: password.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtpRequest {
    pub email: String,
    #[serde(rename = "type")]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtpVerifyRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "type")]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub email: String,
    /// Optional; sent as an empty string when left blank.
    pub phone_number: String,
    pub password: String,
    pub full_name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRegistration {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRegistered {
    #[serde(default)]
    pub admin_id: Option<String>,
}

// ========================
// Cart & Orders
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAdded {
    #[serde(default)]
    pub cart_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub delivery_address: String,
    pub special_instructions: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub order_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
    /// Any status this client does not know; shown as-is, never sent.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire value, e.g. `OUT_FOR_DELIVERY`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(raw))
    }

    /// Display text, e.g. `OUT FOR DELIVERY`.
    pub fn pretty(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Badge background for this status.
    pub fn badge_color(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "#22c55e",
            OrderStatus::Cancelled => "#dc2626",
            OrderStatus::OutForDelivery | OrderStatus::Ready | OrderStatus::Preparing => "#f59e0b",
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Unknown => "#f39c12",
        }
    }
}

// ========================
// Payment
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentOrder {
    pub app_order_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub razorpay_key_id: String,
    pub razorpay_order_id: String,
    pub amount_in_paise: u64,
    pub currency: String,
    pub app_order_id: String,
}

/// What the checkout widget hands its `handler` after a payment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetPayment {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPayment {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
    pub app_order_id: String,
}

impl VerifyPayment {
    pub fn new(paid: WidgetPayment, app_order_id: impl Into<String>) -> Self {
        Self {
            razorpay_payment_id: paid.razorpay_payment_id,
            razorpay_order_id: paid.razorpay_order_id,
            razorpay_signature: paid.razorpay_signature,
            app_order_id: app_order_id.into(),
        }
    }
}

// ========================
// Food Items
// ========================

/// Add/update parameters. `id` present means update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiSuggestRequest {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

// ========================
// Page Data
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    pub order_id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub estimated_time_minutes: Option<u32>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub cart_item_id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrdersPageData {
    pub orders: Vec<OrderCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminDashboardData {
    pub total_orders: f64,
    pub pending_orders: f64,
    pub total_items: f64,
    pub revenue: f64,
    pub recent_orders: Vec<OrderCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoodItemsPageData {
    pub items: Vec<FoodItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuPageData {
    pub items: Vec<FoodItem>,
    pub search: Option<String>,
    pub cart_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartPageData {
    pub lines: Vec<CartLine>,
}

impl CartPageData {
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|l| l.price * l.quantity as f64).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDashboardData {
    pub full_name: String,
    pub cart_count: u32,
    pub order_count: f64,
    pub featured: Vec<FoodItem>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_keeps_the_rest_of_the_board() {
        let data: OrdersPageData = serde_json::from_str(
            r#"{"orders":[
                {"orderId":"ORD1","status":"ON_HOLD","totalAmount":10.0},
                {"orderId":"ORD2","status":"READY","totalAmount":20.0}
            ]}"#,
        )
        .unwrap();
        assert_eq!(data.orders.len(), 2);
        assert_eq!(data.orders[0].status, OrderStatus::Unknown);
        assert_eq!(data.orders[0].status.badge_color(), "#f39c12");
        assert_eq!(data.orders[1].status, OrderStatus::Ready);
        assert_eq!(OrderStatus::parse("UNKNOWN"), None);
    }

    #[test]
    fn test_status_wire_and_display() {
        let status: OrderStatus = serde_json::from_str("\"OUT_FOR_DELIVERY\"").unwrap();
        assert_eq!(status, OrderStatus::OutForDelivery);
        assert_eq!(status.pretty(), "OUT FOR DELIVERY");
        assert_eq!(OrderStatus::parse("delivered"), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::parse("LOST"), None);
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(OrderStatus::Delivered.badge_color(), "#22c55e");
        assert_eq!(OrderStatus::Cancelled.badge_color(), "#dc2626");
        assert_eq!(OrderStatus::Ready.badge_color(), "#f59e0b");
        assert_eq!(OrderStatus::Preparing.badge_color(), "#f59e0b");
        assert_eq!(OrderStatus::Pending.badge_color(), "#f39c12");
    }

    #[test]
    fn test_login_request_omits_unused_identifiers() {
        let req = LoginRequest {
            email: None,
            phone_number: None,
            admin_id: Some("ADM1001".into()),
            password: "pw".into(),
            role: Role::Admin,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"adminId": "ADM1001", "password": "pw", "type": "admin"}));
    }

    #[test]
    fn test_page_data_tolerates_missing_fields() {
        let data: OrdersPageData = serde_json::from_str(
            r#"{"orders":[{"orderId":"ORD1","status":"PENDING","totalAmount":529.0}]}"#,
        )
        .unwrap();
        assert_eq!(data.orders.len(), 1);
        assert_eq!(data.orders[0].estimated_time_minutes, None);
        assert!(data.orders[0].items.is_empty());

        let empty: MenuPageData = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, MenuPageData::default());
    }

    #[test]
    fn test_cart_total() {
        let data = CartPageData {
            lines: vec![
                CartLine { cart_item_id: 1, name: "Wrap".into(), price: 120.0, quantity: 2 },
                CartLine { cart_item_id: 2, name: "Fries".into(), price: 89.5, quantity: 1 },
            ],
        };
        assert_eq!(data.total(), 329.5);
    }
}
