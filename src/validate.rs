//! Form Validation
//!
//! Every check here runs before a request is built. A failure means no
//! request goes out and the page shows the error as a toast.

use thiserror::Error;

use crate::models::{
    AdminRegistration, AiSuggestRequest, CheckoutRequest, FoodItemForm, LoginRequest, OtpRequest,
    OtpVerifyRequest, Role, UserRegistration,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your credentials")]
    MissingCredentials,
    #[error("Please enter both identifier and password")]
    MissingAdminCredentials,
    #[error("Please login using your Admin ID (starting with ADM...) or registered email address.")]
    UnsupportedAdminIdentifier,
    #[error("Please enter your full name")]
    MissingFullName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Please enter and confirm your password")]
    MissingPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter your email OTP")]
    MissingOtp,
    #[error("Please fill all required fields")]
    MissingRequiredFields,
    #[error("Please enter your email")]
    MissingOtpEmail,
    #[error("Please enter delivery address")]
    MissingDeliveryAddress,
    #[error("Please enter a valid estimated time (in minutes)")]
    InvalidEstimatedTime,
    #[error("Type something to search 😋")]
    EmptySearch,
    #[error("Please enter the item name first.")]
    MissingItemName,
    #[error("Item name is required")]
    MissingFoodItemName,
    #[error("Please enter a valid price")]
    InvalidPrice,
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ============================================================================
// Login
// ============================================================================

/// `@` selects email login, anything else is treated as a phone number.
pub fn user_login(identifier: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    let mut req = LoginRequest::new(password, Role::User);
    if identifier.contains('@') {
        req.email = Some(identifier.to_string());
    } else {
        req.phone_number = Some(identifier.to_string());
    }
    Ok(req)
}

/// Admins log in with an email or an `ADM...` id; phone login is refused.
pub fn admin_login(identifier: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    if blank(identifier) || blank(password) {
        return Err(ValidationError::MissingAdminCredentials);
    }
    let mut req = LoginRequest::new(password, Role::Admin);
    if identifier.contains('@') {
        req.email = Some(identifier.trim().to_string());
    } else if identifier.starts_with("ADM") {
        req.admin_id = Some(identifier.trim().to_string());
    } else {
        return Err(ValidationError::UnsupportedAdminIdentifier);
    }
    Ok(req)
}

// ============================================================================
// OTP + Registration
// ============================================================================

pub fn otp_email(email: &str, role: Role) -> Result<OtpRequest, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingOtpEmail);
    }
    Ok(OtpRequest { email: email.to_string(), role })
}

/// Raw field values of the user registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
    pub otp: String,
}

impl UserRegisterForm {
    /// Checks run in form order; the first failure wins.
    pub fn validate(&self) -> Result<(OtpVerifyRequest, UserRegistration), ValidationError> {
        if blank(&self.full_name) {
            return Err(ValidationError::MissingFullName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        let otp = self.otp.trim();
        if otp.is_empty() {
            return Err(ValidationError::MissingOtp);
        }

        let verify = OtpVerifyRequest {
            email: email.to_string(),
            otp: otp.to_string(),
            role: Role::User,
        };
        let registration = UserRegistration {
            email: email.to_string(),
            phone_number: self.phone_number.trim().to_string(),
            password: self.password.clone(),
            full_name: self.full_name.clone(),
            address: self.address.clone(),
        };
        Ok((verify, registration))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminRegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub otp: String,
}

impl AdminRegisterForm {
    pub fn validate(&self) -> Result<(OtpVerifyRequest, AdminRegistration), ValidationError> {
        if blank(&self.full_name) || blank(&self.email) || blank(&self.password) {
            return Err(ValidationError::MissingRequiredFields);
        }
        if blank(&self.otp) {
            return Err(ValidationError::MissingOtp);
        }
        let email = self.email.trim().to_string();
        let verify = OtpVerifyRequest {
            email: email.clone(),
            otp: self.otp.trim().to_string(),
            role: Role::Admin,
        };
        let registration = AdminRegistration {
            full_name: self.full_name.trim().to_string(),
            email,
            phone_number: self.phone_number.trim().to_string(),
            password: self.password.clone(),
        };
        Ok((verify, registration))
    }
}

// ============================================================================
// Cart, orders, menu
// ============================================================================

pub fn checkout(
    delivery_address: &str,
    special_instructions: &str,
) -> Result<CheckoutRequest, ValidationError> {
    let delivery_address = delivery_address.trim();
    if delivery_address.is_empty() {
        return Err(ValidationError::MissingDeliveryAddress);
    }
    Ok(CheckoutRequest {
        delivery_address: delivery_address.to_string(),
        special_instructions: special_instructions.trim().to_string(),
    })
}

/// Leading optional sign and digits after whitespace, like `parseInt(s, 10)`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // saturate instead of overflowing
    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -value } else { value })
}

pub fn estimated_minutes(input: &str) -> Result<u32, ValidationError> {
    match parse_leading_int(input) {
        Some(n) if n >= 1 => u32::try_from(n).map_err(|_| ValidationError::InvalidEstimatedTime),
        _ => Err(ValidationError::InvalidEstimatedTime),
    }
}

pub fn search_query(input: &str) -> Result<String, ValidationError> {
    let q = input.trim();
    if q.is_empty() {
        return Err(ValidationError::EmptySearch);
    }
    Ok(q.to_string())
}

// ============================================================================
// Food items
// ============================================================================

pub fn ai_suggest(name: &str, category: &str) -> Result<AiSuggestRequest, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingItemName);
    }
    Ok(AiSuggestRequest {
        name: name.to_string(),
        category: category.trim().to_string(),
    })
}

/// Editable state of the add/edit item modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodItemDraft {
    /// Present when editing an existing item.
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
}

impl FoodItemDraft {
    pub fn validate(&self) -> Result<FoodItemForm, ValidationError> {
        if blank(&self.name) {
            return Err(ValidationError::MissingFoodItemName);
        }
        let price = self.price.trim();
        match price.parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => {}
            _ => return Err(ValidationError::InvalidPrice),
        }
        Ok(FoodItemForm {
            name: self.name.clone(),
            description: self.description.clone(),
            price: price.to_string(),
            category: self.category.clone(),
            image_url: self.image_url.clone(),
            id: self.id.map(|id| id.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_login_picks_email_or_phone() {
        let req = user_login("  a@b.com ", "pw").unwrap();
        assert_eq!(req.email.as_deref(), Some("a@b.com"));
        assert!(req.phone_number.is_none());

        let req = user_login("9876543210", " pw ").unwrap();
        assert_eq!(req.phone_number.as_deref(), Some("9876543210"));
        // user passwords are sent as typed
        assert_eq!(req.password, " pw ");
    }

    #[test]
    fn test_user_login_requires_both() {
        assert_eq!(user_login("  ", "pw"), Err(ValidationError::MissingCredentials));
        assert_eq!(user_login("a@b.com", ""), Err(ValidationError::MissingCredentials));
    }

    #[test]
    fn test_admin_login_identifier_kinds() {
        let req = admin_login("ADM1042", "secret").unwrap();
        assert_eq!(req.admin_id.as_deref(), Some("ADM1042"));

        let req = admin_login("boss@shop.io", "secret").unwrap();
        assert_eq!(req.email.as_deref(), Some("boss@shop.io"));

        let err = admin_login("9876543210", "secret").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please login using your Admin ID (starting with ADM...) or registered email address."
        );
        assert_eq!(admin_login("ADM1", "   "), Err(ValidationError::MissingAdminCredentials));
    }

    fn filled_user_form() -> UserRegisterForm {
        UserRegisterForm {
            full_name: "Asha Rao".into(),
            email: " asha@example.com ".into(),
            phone_number: "".into(),
            password: "pw1".into(),
            confirm_password: "pw1".into(),
            address: "12 Hill Rd".into(),
            otp: " 123456 ".into(),
        }
    }

    #[test]
    fn test_user_register_ok() {
        let (verify, reg) = filled_user_form().validate().unwrap();
        assert_eq!(verify.email, "asha@example.com");
        assert_eq!(verify.otp, "123456");
        assert_eq!(verify.role, Role::User);
        assert_eq!(reg.phone_number, "");
    }

    #[test]
    fn test_user_register_check_order() {
        let mut form = filled_user_form();
        form.full_name = " ".into();
        form.email = "".into();
        assert_eq!(form.validate().unwrap_err(), ValidationError::MissingFullName);

        let mut form = filled_user_form();
        form.confirm_password = "pw2".into();
        form.otp = "".into();
        assert_eq!(form.validate().unwrap_err(), ValidationError::PasswordMismatch);

        let mut form = filled_user_form();
        form.otp = "  ".into();
        assert_eq!(form.validate().unwrap_err().to_string(), "Please enter your email OTP");
    }

    #[test]
    fn test_admin_register() {
        let form = AdminRegisterForm {
            full_name: "Dev".into(),
            email: "dev@x.io".into(),
            password: "pw".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err(), ValidationError::MissingOtp);

        let form = AdminRegisterForm { otp: "1".into(), password: "".into(), ..form };
        assert_eq!(form.validate().unwrap_err(), ValidationError::MissingRequiredFields);
    }

    #[test]
    fn test_checkout_requires_address() {
        assert_eq!(checkout("   ", "extra napkins"), Err(ValidationError::MissingDeliveryAddress));
        let req = checkout(" 4 Lake View ", " ring bell ").unwrap();
        assert_eq!(req.delivery_address, "4 Lake View");
        assert_eq!(req.special_instructions, "ring bell");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("25"), Some(25));
        assert_eq!(parse_leading_int("  30min"), Some(30));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_parse_leading_int_saturates_long_digit_runs() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999999"), Some(-i64::MAX));
        assert_eq!(
            estimated_minutes("99999999999999999999999"),
            Err(ValidationError::InvalidEstimatedTime)
        );
    }

    #[test]
    fn test_estimated_minutes() {
        assert_eq!(estimated_minutes("45"), Ok(45));
        assert_eq!(estimated_minutes("0"), Err(ValidationError::InvalidEstimatedTime));
        assert_eq!(estimated_minutes("-3"), Err(ValidationError::InvalidEstimatedTime));
        assert_eq!(estimated_minutes(""), Err(ValidationError::InvalidEstimatedTime));
    }

    #[test]
    fn test_search_and_ai_suggest() {
        assert_eq!(search_query("  "), Err(ValidationError::EmptySearch));
        assert_eq!(search_query(" paneer ").unwrap(), "paneer");
        assert_eq!(ai_suggest("", "Snacks"), Err(ValidationError::MissingItemName));
    }

    #[test]
    fn test_food_item_draft() {
        let draft = FoodItemDraft {
            id: Some(7),
            name: "Masala Dosa".into(),
            price: " 120.50 ".into(),
            ..Default::default()
        };
        let form = draft.validate().unwrap();
        assert_eq!(form.price, "120.50");
        assert_eq!(form.id.as_deref(), Some("7"));

        let bad = FoodItemDraft { price: "-1".into(), ..draft.clone() };
        assert_eq!(bad.validate(), Err(ValidationError::InvalidPrice));
        let unnamed = FoodItemDraft { name: " ".into(), ..draft };
        assert_eq!(unnamed.validate(), Err(ValidationError::MissingFoodItemName));
    }
}
