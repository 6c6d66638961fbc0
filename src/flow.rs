//! Request Sequences
//!
//! The multi-request actions behind the cart, checkout and registration
//! forms. They validate first and only then talk to the server, one request
//! at a time, reporting progress through callbacks so components stay thin.

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{CreatePaymentOrder, PaymentOrder, Role, VerifyPayment, WidgetPayment};
use crate::outcome::{self, Outcome};
use crate::validate::{self, AdminRegisterForm, UserRegisterForm, ValidationError};

// ========================
// Cart
// ========================

/// What a quantity button asks the server for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Update(u32),
    /// Quantity fell below one; removal needs confirmation first.
    Remove,
}

impl QuantityChange {
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity < 1 {
            QuantityChange::Remove
        } else {
            QuantityChange::Update(quantity)
        }
    }
}

/// None when the user kept the line.
pub async fn change_quantity(
    api: &ApiClient,
    cart_item_id: u64,
    quantity: u32,
    confirm_remove: impl FnOnce() -> bool,
) -> Option<Outcome> {
    match QuantityChange::for_quantity(quantity) {
        QuantityChange::Update(quantity) => {
            Some(outcome::cart_updated(api.update_cart(cart_item_id, quantity).await))
        }
        QuantityChange::Remove => {
            if !confirm_remove() {
                return None;
            }
            Some(outcome::cart_removed(api.remove_from_cart(cart_item_id).await))
        }
    }
}

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Verifying,
    Creating,
}

impl Phase {
    /// Submit button text.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Register",
            Phase::Verifying => "Verifying OTP...",
            Phase::Creating => "Creating account...",
        }
    }
}

/// Verify the email OTP, then create the account. A failed verification
/// stops before the account request.
pub async fn register_user(
    api: &ApiClient,
    form: &UserRegisterForm,
    phase: impl Fn(Phase),
) -> std::result::Result<Outcome, ValidationError> {
    let (verify, registration) = form.validate()?;
    phase(Phase::Verifying);
    let verified = api.verify_otp(&verify).await;
    if let Some(failed) = outcome::otp_verification(Role::User, &verified) {
        phase(Phase::Idle);
        return Ok(failed);
    }
    phase(Phase::Creating);
    let result = api.register_user(&registration).await;
    phase(Phase::Idle);
    Ok(outcome::user_registered(result))
}

pub async fn register_admin(
    api: &ApiClient,
    form: &AdminRegisterForm,
    phase: impl Fn(Phase),
) -> std::result::Result<Outcome, ValidationError> {
    let (verify, registration) = form.validate()?;
    phase(Phase::Verifying);
    let verified = api.verify_otp(&verify).await;
    if let Some(failed) = outcome::otp_verification(Role::Admin, &verified) {
        phase(Phase::Idle);
        return Ok(failed);
    }
    phase(Phase::Creating);
    let result = api.register_admin(&registration).await;
    phase(Phase::Idle);
    Ok(outcome::admin_registered(result))
}

// ========================
// Checkout
// ========================

/// Create the order from the cart, then its payment order. `notify` sees
/// the order toast and any failure; None means the widget must not open.
pub async fn prepare_checkout(
    api: &ApiClient,
    delivery_address: &str,
    special_instructions: &str,
    notify: impl Fn(&Outcome),
) -> std::result::Result<Option<PaymentOrder>, ValidationError> {
    let req = validate::checkout(delivery_address, special_instructions)?;
    let created = api.create_order_from_cart(&req).await;
    notify(&outcome::checkout_order(&created));
    let Ok(order) = created else {
        return Ok(None);
    };

    let payment = api
        .create_payment_order(&CreatePaymentOrder {
            app_order_id: order.order_id,
            amount: order.amount,
        })
        .await;
    if let Some(failed) = outcome::payment_order(&payment) {
        notify(&failed);
        return Ok(None);
    }
    Ok(payment.ok())
}

/// Verify what the widget handed back. A widget error never reaches the
/// server.
pub async fn settle_payment(
    api: &ApiClient,
    paid: Result<WidgetPayment>,
    app_order_id: String,
    settle: impl FnOnce(Result<()>) -> Outcome,
) -> Outcome {
    let verified = match paid {
        Ok(paid) => api.verify_payment(&VerifyPayment::new(paid, app_order_id)).await,
        Err(e) => Err(e),
    };
    settle(verified)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::RefCell;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::outcome::Effect;

    fn messages(log: &RefCell<Vec<String>>) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn test_quantity_below_one_becomes_remove() {
        assert_eq!(QuantityChange::for_quantity(0), QuantityChange::Remove);
        assert_eq!(QuantityChange::for_quantity(1), QuantityChange::Update(1));
        assert_eq!(QuantityChange::for_quantity(4), QuantityChange::Update(4));
    }

    #[tokio::test]
    async fn test_zero_quantity_removes_after_confirm() {
        let server = MockServer::start_async().await;
        let update = server
            .mock_async(|when, then| {
                when.method(POST).path("/user/cart/update");
                then.status(200).json_body(json!({"success": true}));
            })
            .await;
        let remove = server
            .mock_async(|when, then| {
                when.method(POST).path("/user/cart/remove").query_param("cartItemId", "9");
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let outcome = change_quantity(&api, 9, 0, || true).await.unwrap();
        remove.assert_hits_async(1).await;
        update.assert_hits_async(0).await;
        assert_eq!(outcome.effect, Effect::Reload { delay_ms: 0 });
    }

    #[tokio::test]
    async fn test_declined_remove_sends_nothing() {
        let server = MockServer::start_async().await;
        let any = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let api = ApiClient::new(server.base_url());
        assert!(change_quantity(&api, 9, 0, || false).await.is_none());
        any.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_positive_quantity_updates() {
        let server = MockServer::start_async().await;
        let update = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/user/cart/update")
                    .query_param("cartItemId", "9")
                    .query_param("quantity", "3");
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let outcome = change_quantity(&api, 9, 3, || panic!("no confirm for updates")).await;
        update.assert_hits_async(1).await;
        assert!(outcome.unwrap().succeeded());
    }

    fn user_form() -> UserRegisterForm {
        UserRegisterForm {
            full_name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone_number: String::new(),
            password: "pw1".into(),
            confirm_password: "pw1".into(),
            address: "4 Lake View".into(),
            otp: "123456".into(),
        }
    }

    #[tokio::test]
    async fn test_invalid_registration_sends_nothing() {
        let server = MockServer::start_async().await;
        let any = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let form = UserRegisterForm { confirm_password: "pw2".into(), ..user_form() };
        let phases = RefCell::new(Vec::new());
        let err = register_user(&api, &form, |p| phases.borrow_mut().push(p)).await.unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
        assert!(phases.borrow().is_empty());
        any.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_registration_verifies_then_creates() {
        let server = MockServer::start_async().await;
        let verify = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/user/verify-otp")
                    .json_body(json!({"email": "asha@example.com", "otp": "123456", "type": "user"}));
                then.status(200).json_body(json!({"success": true}));
            })
            .await;
        let register = server
            .mock_async(|when, then| {
                when.method(POST).path("/user/register");
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let phases = RefCell::new(Vec::new());
        let outcome = register_user(&api, &user_form(), |p| phases.borrow_mut().push(p))
            .await
            .unwrap();
        verify.assert_hits_async(1).await;
        register.assert_hits_async(1).await;
        assert_eq!(*phases.borrow(), vec![Phase::Verifying, Phase::Creating, Phase::Idle]);
        assert_eq!(outcome.effect, Effect::navigate("/user/login", 1800));
    }

    #[tokio::test]
    async fn test_rejected_otp_stops_before_account() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/verify-otp");
                then.status(200).json_body(json!({"success": false, "message": "expired"}));
            })
            .await;
        let register = server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/register");
                then.status(200).json_body(json!({"success": true, "adminId": "ADM1"}));
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let form = AdminRegisterForm {
            full_name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone_number: String::new(),
            password: "pw".into(),
            otp: "000000".into(),
        };
        let phases = RefCell::new(Vec::new());
        let outcome = register_admin(&api, &form, |p| phases.borrow_mut().push(p))
            .await
            .unwrap();
        register.assert_hits_async(0).await;
        assert_eq!(*phases.borrow(), vec![Phase::Verifying, Phase::Idle]);
        assert_eq!(outcome, Outcome::error("Invalid email OTP"));
    }

    #[tokio::test]
    async fn test_checkout_without_address_sends_nothing() {
        let server = MockServer::start_async().await;
        let any = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let log = RefCell::new(Vec::new());
        let err = prepare_checkout(&api, "   ", "", |o| {
            log.borrow_mut().extend(o.toast.as_ref().map(|t| t.message.clone()))
        })
        .await
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingDeliveryAddress);
        assert!(messages(&log).is_empty());
        any.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_checkout_creates_order_then_payment_order() {
        let server = MockServer::start_async().await;
        let order = server
            .mock_async(|when, then| {
                when.method(POST).path("/user/orders/create-from-cart");
                then.status(200)
                    .json_body(json!({"success": true, "orderId": "ORD7", "amount": 529.0}));
            })
            .await;
        let payment = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/payment/create-order")
                    .json_body(json!({"appOrderId": "ORD7", "amount": 529.0}));
                then.status(200).json_body(json!({
                    "razorpayKeyId": "rzp_test_key",
                    "razorpayOrderId": "order_Abc",
                    "amountInPaise": 52900,
                    "currency": "INR",
                    "appOrderId": "ORD7"
                }));
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let log = RefCell::new(Vec::new());
        let prepared = prepare_checkout(&api, "4 Lake View", "", |o| {
            log.borrow_mut().extend(o.toast.as_ref().map(|t| t.message.clone()))
        })
        .await
        .unwrap()
        .unwrap();
        order.assert_hits_async(1).await;
        payment.assert_hits_async(1).await;
        assert_eq!(prepared.razorpay_order_id, "order_Abc");
        assert_eq!(messages(&log), vec!["Order created. Opening payment gateway...".to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_order_skips_payment_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/orders/create-from-cart");
                then.status(200).json_body(json!({"success": false, "message": "Cart is empty"}));
            })
            .await;
        let payment = server
            .mock_async(|when, then| {
                when.method(POST).path("/payment/create-order");
                then.status(200);
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let log = RefCell::new(Vec::new());
        let prepared = prepare_checkout(&api, "4 Lake View", "", |o| {
            log.borrow_mut().extend(o.toast.as_ref().map(|t| t.message.clone()))
        })
        .await
        .unwrap();
        assert!(prepared.is_none());
        payment.assert_hits_async(0).await;
        assert_eq!(messages(&log), vec!["Cart is empty".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_payment_order_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/orders/create-from-cart");
                then.status(200)
                    .json_body(json!({"success": true, "orderId": "ORD7", "amount": 529.0}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/payment/create-order");
                then.status(500);
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let log = RefCell::new(Vec::new());
        let prepared = prepare_checkout(&api, "4 Lake View", "", |o| {
            log.borrow_mut().extend(o.toast.as_ref().map(|t| t.message.clone()))
        })
        .await
        .unwrap();
        assert!(prepared.is_none());
        assert_eq!(
            messages(&log),
            vec![
                "Order created. Opening payment gateway...".to_string(),
                "Payment initialization failed".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_settle_verifies_widget_payment() {
        let server = MockServer::start_async().await;
        let verify = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/payment/verify")
                    .json_body_partial(r#"{"razorpayPaymentId": "pay_1", "appOrderId": "ORD7"}"#);
                then.status(200).body("ok");
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let paid = WidgetPayment {
            razorpay_payment_id: "pay_1".into(),
            razorpay_order_id: "order_Abc".into(),
            razorpay_signature: "sig".into(),
        };
        let outcome = settle_payment(&api, Ok(paid), "ORD7".into(), outcome::payment_verified).await;
        verify.assert_hits_async(1).await;
        assert_eq!(outcome.effect, Effect::navigate("/payment/success", 0));
    }

    #[tokio::test]
    async fn test_widget_error_never_reaches_verify() {
        let server = MockServer::start_async().await;
        let verify = server
            .mock_async(|when, then| {
                when.method(POST).path("/payment/verify");
                then.status(200);
            })
            .await;

        let api = ApiClient::new(server.base_url());
        let paid = Err(ApiError::Widget("unreadable payment response".into()));
        let outcome = settle_payment(&api, paid, "ORD7".into(), outcome::payment_verified).await;
        verify.assert_hits_async(0).await;
        assert_eq!(outcome.effect, Effect::navigate("/payment/failed", 0));
    }
}
