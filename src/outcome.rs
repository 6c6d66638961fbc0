//! Reply Outcomes
//!
//! Pure mapping from an endpoint result to what the page does next: which
//! toast to show and whether to stay, navigate or reload. Components apply
//! the result; nothing here touches the DOM.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{ApiError, Result};
use crate::models::{
    Ack, AdminRegistered, AiSuggestion, CartAdded, LoginReply, OrderCreated, OrderStatus,
    PaymentOrder, Role,
};
use crate::toast::Toast;

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Stay,
    Navigate { href: String, delay_ms: u32 },
    Reload { delay_ms: u32 },
}

impl Effect {
    pub fn navigate(href: impl Into<String>, delay_ms: u32) -> Self {
        Effect::Navigate { href: href.into(), delay_ms }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub toast: Option<Toast>,
    pub effect: Effect,
}

impl Outcome {
    pub fn success(message: impl Into<String>, effect: Effect) -> Self {
        Self { toast: Some(Toast::success(message)), effect }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { toast: Some(Toast::error(message)), effect: Effect::Stay }
    }

    pub fn silent(effect: Effect) -> Self {
        Self { toast: None, effect }
    }

    /// True unless the toast is an error.
    pub fn succeeded(&self) -> bool {
        !self.toast.as_ref().is_some_and(Toast::is_error)
    }
}

/// Server rejection shows its message or `rejected`; anything that never
/// produced a server answer shows `transport`.
pub fn failure(err: &ApiError, rejected: &str, transport: &str) -> Outcome {
    tracing::warn!(error = %err, "request failed");
    if err.is_transport() {
        Outcome::error(transport)
    } else {
        Outcome::error(err.user_message(rejected))
    }
}

// ============================================================================
// Auth
// ============================================================================

pub fn login(role: Role, result: Result<LoginReply>) -> Outcome {
    let (home, delay_ms) = match role {
        Role::User => ("/user/dashboard", 900),
        Role::Admin => ("/admin/dashboard", 1000),
    };
    match result {
        Ok(reply) => {
            let href = reply.redirect.filter(|r| !r.is_empty()).unwrap_or_else(|| home.to_string());
            Outcome::success("Login successful! Redirecting...", Effect::navigate(href, delay_ms))
        }
        Err(e) => failure(&e, "Login failed", "Error during login"),
    }
}

/// On success the page reveals its OTP input group.
pub fn otp_sent(role: Role, result: Result<Ack>) -> Outcome {
    match result {
        Ok(_) => Outcome::success("OTP sent to your email", Effect::Stay),
        Err(e) => {
            let rejected = match role {
                Role::User => "Error sending OTP",
                Role::Admin => "Error sending email OTP",
            };
            failure(&e, rejected, "Error sending OTP")
        }
    }
}

/// None lets registration continue. A rejected OTP never shows the server
/// text.
pub fn otp_verification(role: Role, result: &Result<Ack>) -> Option<Outcome> {
    let err = result.as_ref().err()?;
    if err.is_transport() {
        tracing::warn!(error = %err, "otp verification failed");
        return Some(Outcome::error("Error during registration"));
    }
    Some(Outcome::error(match role {
        Role::User => "Invalid or expired email OTP",
        Role::Admin => "Invalid email OTP",
    }))
}

pub fn user_registered(result: Result<Ack>) -> Outcome {
    match result {
        Ok(_) => Outcome::success(
            "Registration successful! Redirecting to login...",
            Effect::navigate("/user/login", 1800),
        ),
        Err(e) => failure(&e, "Registration failed", "Error during registration"),
    }
}

pub fn admin_registered(result: Result<AdminRegistered>) -> Outcome {
    match result {
        Ok(reply) => {
            let message = match reply.admin_id.filter(|id| !id.is_empty()) {
                Some(id) => format!("Registration successful! Your Admin ID: {id}. Redirecting..."),
                None => "Registration successful! Redirecting...".to_string(),
            };
            Outcome::success(message, Effect::navigate("/admin/login", 3000))
        }
        Err(e) => failure(&e, "Registration failed", "Error during registration"),
    }
}

// ============================================================================
// Menu + Cart
// ============================================================================

pub fn menu_search_href(query: &str) -> String {
    format!("/user/menu?search={}", utf8_percent_encode(query, URI_COMPONENT))
}

pub fn menu_search(query: &str) -> Outcome {
    Outcome::silent(Effect::navigate(menu_search_href(query), 150))
}

/// Also returns the new cart badge count on success.
pub fn cart_added(result: Result<CartAdded>, previous: u32) -> (Outcome, Option<u32>) {
    match result {
        Ok(reply) => {
            let count = reply.cart_count.unwrap_or(previous.saturating_add(1));
            (Outcome::success("Item added to cart!", Effect::Stay), Some(count))
        }
        Err(e) => (
            failure(&e, "Could not add item to cart", "Network error: could not add item"),
            None,
        ),
    }
}

pub fn cart_updated(result: Result<Ack>) -> Outcome {
    match result {
        Ok(_) => Outcome::silent(Effect::Reload { delay_ms: 0 }),
        Err(e) => failure(&e, "Error updating cart", "Error updating cart"),
    }
}

pub fn cart_removed(result: Result<Ack>) -> Outcome {
    match result {
        Ok(_) => Outcome::silent(Effect::Reload { delay_ms: 0 }),
        Err(e) => failure(&e, "Error removing item", "Error removing item"),
    }
}

// ============================================================================
// Admin orders
// ============================================================================

pub fn status_updated(status: OrderStatus, result: Result<Ack>) -> Outcome {
    match result {
        Ok(_) => Outcome::success(format!("Order status updated to {}", status.pretty()), Effect::Stay),
        Err(e) => failure(&e, "Error updating order status", "Error updating order status"),
    }
}

pub fn time_set(minutes: u32, result: Result<Ack>) -> Outcome {
    match result {
        Ok(_) => Outcome::success(format!("Estimated time set to {minutes} minutes"), Effect::Stay),
        Err(e) => failure(&e, "Error setting estimated time", "Error setting estimated time"),
    }
}

// ============================================================================
// Admin food items
// ============================================================================

pub fn item_saved(result: Result<Ack>) -> Outcome {
    match result {
        Ok(_) => Outcome::success("Item saved successfully", Effect::Reload { delay_ms: 300 }),
        Err(e) => failure(&e, "Error saving item", "Error saving item"),
    }
}

pub fn item_deleted(result: Result<Ack>) -> Outcome {
    match result {
        Ok(_) => Outcome::success("Item deleted successfully", Effect::Stay),
        Err(e) => failure(&e, "Error deleting item", "Error deleting item"),
    }
}

/// What the AI button changes in the item modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiOutcome {
    pub hint: String,
    pub toast: Toast,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub const AI_PENDING_HINT: &str = "Generating description & image suggestion...";

pub fn ai_suggested(result: Result<AiSuggestion>) -> AiOutcome {
    match result {
        Ok(s) => {
            let hint = if s.suggestions.is_empty() {
                "AI suggestion applied!".to_string()
            } else {
                format!("AI ideas: {}", s.suggestions.join(", "))
            };
            AiOutcome {
                hint,
                toast: Toast::success("AI suggestion applied"),
                description: s.description.filter(|d| !d.is_empty()),
                image_url: s.image_url.filter(|u| !u.is_empty()),
            }
        }
        Err(ApiError::Status(code)) => AiOutcome {
            hint: format!("AI request failed: {code}"),
            toast: Toast::error("AI request failed, check server logs."),
            description: None,
            image_url: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "ai suggest failed");
            AiOutcome {
                hint: "AI could not generate data. Try again.".to_string(),
                toast: Toast::error("AI could not generate data"),
                description: None,
                image_url: None,
            }
        }
    }
}

// ============================================================================
// Checkout + payment
// ============================================================================

pub fn checkout_order(result: &Result<OrderCreated>) -> Outcome {
    match result {
        Ok(_) => Outcome::success("Order created. Opening payment gateway...", Effect::Stay),
        Err(e) => checkout_failed(e, "Order creation failed"),
    }
}

pub fn payment_order(result: &Result<PaymentOrder>) -> Option<Outcome> {
    let err = result.as_ref().err()?;
    Some(checkout_failed(err, "Payment initialization failed"))
}

/// Widget errors carry their own text; other transport trouble collapses to
/// a generic message.
pub fn checkout_failed(err: &ApiError, rejected: &str) -> Outcome {
    match err {
        ApiError::Widget(detail) => {
            tracing::warn!(%detail, "checkout widget failed");
            Outcome::error(detail.clone())
        }
        ApiError::Network(_) => failure(err, rejected, "Checkout failed"),
        _ => failure(err, rejected, rejected),
    }
}

pub fn payment_verified(result: Result<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::silent(Effect::navigate("/payment/success", 0)),
        Err(e) => {
            tracing::warn!(error = %e, "payment verification failed");
            Outcome::silent(Effect::navigate("/payment/failed", 0))
        }
    }
}

pub fn admin_pay_pending() -> Toast {
    Toast::success("Creating subscription order...")
}

pub fn admin_pay_start_failed(err: &ApiError) -> Outcome {
    tracing::warn!(error = %err, "subscription order failed");
    let detail = match err {
        ApiError::Widget(detail) => detail.clone(),
        _ => err.user_message("Failed to create subscription order"),
    };
    Outcome::error(format!("Payment start error: {detail}"))
}

pub fn admin_pay_verified(result: Result<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::success(
            "Payment successful! Redirecting...",
            Effect::navigate("/admin/dashboard", 1500),
        ),
        Err(e) if e.is_transport() => {
            tracing::warn!(error = %e, "subscription verification errored");
            Outcome::error(format!("Payment verification error: {e}"))
        }
        Err(_) => Outcome::error("Payment verification failed."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(message: &str) -> ApiError {
        ApiError::Rejected { message: Some(message.to_string()) }
    }

    fn decode_error() -> ApiError {
        ApiError::Decode(serde_json::from_str::<Ack>("<html>").unwrap_err())
    }

    fn toast_text(outcome: &Outcome) -> &str {
        outcome.toast.as_ref().map(|t| t.message.as_str()).unwrap_or("")
    }

    #[test]
    fn test_login_redirects() {
        let user = login(Role::User, Ok(LoginReply { redirect: None }));
        assert_eq!(user.effect, Effect::navigate("/user/dashboard", 900));
        assert_eq!(toast_text(&user), "Login successful! Redirecting...");

        let admin = login(Role::Admin, Ok(LoginReply { redirect: Some("/admin/pay".into()) }));
        assert_eq!(admin.effect, Effect::navigate("/admin/pay", 1000));
    }

    #[test]
    fn test_login_failure_messages() {
        let out = login(Role::User, Err(rejected("Invalid credentials")));
        assert!(!out.succeeded());
        assert_eq!(toast_text(&out), "Invalid credentials");

        let out = login(Role::User, Err(ApiError::Rejected { message: None }));
        assert_eq!(toast_text(&out), "Login failed");

        let out = login(Role::Admin, Err(decode_error()));
        assert_eq!(toast_text(&out), "Error during login");
    }

    #[test]
    fn test_otp_verification_ignores_server_text() {
        assert!(otp_verification(Role::User, &Ok(Ack::default())).is_none());

        let out = otp_verification(Role::User, &Err(rejected("OTP expired at 10:02"))).unwrap();
        assert_eq!(toast_text(&out), "Invalid or expired email OTP");

        let out = otp_verification(Role::Admin, &Err(rejected("nope"))).unwrap();
        assert_eq!(toast_text(&out), "Invalid email OTP");
    }

    #[test]
    fn test_registration() {
        let out = user_registered(Ok(Ack::default()));
        assert_eq!(out.effect, Effect::navigate("/user/login", 1800));

        let out = admin_registered(Ok(AdminRegistered { admin_id: Some("ADM1007".into()) }));
        assert_eq!(toast_text(&out), "Registration successful! Your Admin ID: ADM1007. Redirecting...");
        assert_eq!(out.effect, Effect::navigate("/admin/login", 3000));
    }

    #[test]
    fn test_cart_added_uses_server_count() {
        let (out, badge) = cart_added(Ok(CartAdded { cart_count: Some(3) }), 0);
        assert_eq!(badge, Some(3));
        assert_eq!(toast_text(&out), "Item added to cart!");

        let (_, badge) = cart_added(Ok(CartAdded { cart_count: None }), 4);
        assert_eq!(badge, Some(5));
    }

    #[test]
    fn test_cart_added_failures() {
        let (out, badge) = cart_added(Err(rejected("Out of stock")), 2);
        assert_eq!(toast_text(&out), "Out of stock");
        assert_eq!(badge, None);

        let (out, _) = cart_added(Err(ApiError::Rejected { message: None }), 2);
        assert_eq!(toast_text(&out), "Could not add item to cart");

        let (out, _) = cart_added(Err(decode_error()), 2);
        assert_eq!(toast_text(&out), "Network error: could not add item");
    }

    #[test]
    fn test_cart_update_reloads() {
        assert_eq!(cart_updated(Ok(Ack::default())).effect, Effect::Reload { delay_ms: 0 });
        assert!(cart_updated(Ok(Ack::default())).toast.is_none());
        assert_eq!(toast_text(&cart_removed(Err(decode_error()))), "Error removing item");
    }

    #[test]
    fn test_admin_order_updates() {
        let out = status_updated(OrderStatus::OutForDelivery, Ok(Ack::default()));
        assert_eq!(toast_text(&out), "Order status updated to OUT FOR DELIVERY");

        let out = time_set(25, Ok(Ack::default()));
        assert_eq!(toast_text(&out), "Estimated time set to 25 minutes");

        let out = time_set(25, Err(ApiError::Rejected { message: Some(String::new()) }));
        assert_eq!(toast_text(&out), "Error setting estimated time");
    }

    #[test]
    fn test_item_saved_reloads_after_delay() {
        let out = item_saved(Ok(Ack::default()));
        assert_eq!(out.effect, Effect::Reload { delay_ms: 300 });
        assert!(out.succeeded());
    }

    #[test]
    fn test_ai_suggestion_outcomes() {
        let out = ai_suggested(Ok(AiSuggestion {
            description: Some("Crispy rice crepe".into()),
            image_url: None,
            suggestions: vec!["Add chutney".into(), "Serve hot".into()],
        }));
        assert_eq!(out.hint, "AI ideas: Add chutney, Serve hot");
        assert_eq!(out.description.as_deref(), Some("Crispy rice crepe"));

        let out = ai_suggested(Ok(AiSuggestion::default()));
        assert_eq!(out.hint, "AI suggestion applied!");

        let out = ai_suggested(Err(ApiError::Status(502)));
        assert_eq!(out.hint, "AI request failed: 502");
        assert_eq!(out.toast.message, "AI request failed, check server logs.");

        let out = ai_suggested(Err(decode_error()));
        assert_eq!(out.toast.message, "AI could not generate data");
    }

    #[test]
    fn test_checkout_flow_messages() {
        let out = checkout_order(&Err(rejected("Cart is empty")));
        assert_eq!(toast_text(&out), "Cart is empty");

        let out = checkout_order(&Err(ApiError::Rejected { message: None }));
        assert_eq!(toast_text(&out), "Order creation failed");

        let out = payment_order(&Err(ApiError::Status(500))).unwrap();
        assert_eq!(toast_text(&out), "Payment initialization failed");

        assert_eq!(payment_verified(Ok(())).effect, Effect::navigate("/payment/success", 0));
        assert_eq!(
            payment_verified(Err(ApiError::Status(400))).effect,
            Effect::navigate("/payment/failed", 0)
        );
    }

    #[test]
    fn test_admin_pay_messages() {
        let out = admin_pay_start_failed(&ApiError::Rejected { message: None });
        assert_eq!(toast_text(&out), "Payment start error: Failed to create subscription order");

        let out = admin_pay_start_failed(&rejected("Admin not logged in"));
        assert_eq!(toast_text(&out), "Payment start error: Admin not logged in");

        let out = admin_pay_verified(Ok(()));
        assert_eq!(out.effect, Effect::navigate("/admin/dashboard", 1500));

        let out = admin_pay_verified(Err(ApiError::Status(400)));
        assert_eq!(toast_text(&out), "Payment verification failed.");
    }

    #[test]
    fn test_menu_search_href_encodes_like_uri_component() {
        assert_eq!(menu_search_href("paneer wrap"), "/user/menu?search=paneer%20wrap");
        assert_eq!(menu_search_href("fish & chips"), "/user/menu?search=fish%20%26%20chips");
        assert_eq!(menu_search_href("mom's (best)"), "/user/menu?search=mom's%20(best)");
        assert_eq!(menu_search("dosa").effect, Effect::navigate("/user/menu?search=dosa", 150));
    }
}
