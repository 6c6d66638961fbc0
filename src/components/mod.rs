//! UI Components
//!
//! One top-level component per page, plus the shared pieces they build on.

mod admin_dashboard;
mod admin_food_items;
mod admin_orders;
mod admin_pay;
mod auth;
mod cart_button;
mod cart_view;
mod checkout_form;
mod delete_confirm_button;
mod form_field;
mod landing;
mod login_form;
mod menu_view;
mod register_form;
mod toast_host;
mod user_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use admin_food_items::FoodItemsPage;
pub use admin_orders::OrderBoard;
pub use admin_pay::AdminPay;
pub use cart_view::CartPage;
pub use checkout_form::CheckoutForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use landing::LandingHero;
pub use login_form::LoginForm;
pub use menu_view::MenuPage;
pub use register_form::{AdminRegister, UserRegister};
pub use toast_host::ToastHost;
pub use user_dashboard::UserDashboard;
