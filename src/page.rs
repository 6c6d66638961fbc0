//! Page Selection
//!
//! The server marks each page with `<body data-page="...">`; that value
//! picks the component to mount and the page's toast behaviour.

/// Where the floating toast sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPlacement {
    /// 16px from the top-right corner.
    Admin,
    /// 20px from the top-right corner.
    User,
}

impl ToastPlacement {
    pub fn inset_px(&self) -> u32 {
        match self {
            ToastPlacement::Admin => 16,
            ToastPlacement::User => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    UserLogin,
    UserRegister,
    UserDashboard,
    Menu,
    Cart,
    Checkout,
    AdminLogin,
    AdminRegister,
    AdminDashboard,
    AdminOrders,
    AdminFoodItems,
    AdminPay,
}

impl Page {
    pub fn from_attr(value: &str) -> Option<Self> {
        let page = match value.trim() {
            "landing" => Page::Landing,
            "user-login" => Page::UserLogin,
            "user-register" => Page::UserRegister,
            "user-dashboard" => Page::UserDashboard,
            "menu" => Page::Menu,
            "cart" => Page::Cart,
            "checkout" => Page::Checkout,
            "admin-login" => Page::AdminLogin,
            "admin-register" => Page::AdminRegister,
            "admin-dashboard" => Page::AdminDashboard,
            "admin-orders" => Page::AdminOrders,
            "admin-food-items" => Page::AdminFoodItems,
            "admin-pay" => Page::AdminPay,
            _ => return None,
        };
        Some(page)
    }

    /// How long a toast stays up before it clears itself.
    pub fn toast_timeout_ms(&self) -> u32 {
        match self {
            Page::UserLogin | Page::UserRegister | Page::UserDashboard => 3500,
            // inline form message
            Page::AdminLogin | Page::AdminRegister => 5000,
            Page::AdminDashboard | Page::AdminOrders | Page::AdminFoodItems | Page::AdminPay => 4000,
            Page::Landing | Page::Menu | Page::Cart | Page::Checkout => 3000,
        }
    }

    pub fn toast_id(&self) -> &'static str {
        match self {
            Page::Menu => "menuToast",
            Page::Cart => "cartToast",
            Page::Checkout => "checkoutToast",
            Page::AdminPay => "adminPayToast",
            Page::AdminLogin
            | Page::AdminRegister
            | Page::AdminDashboard
            | Page::AdminOrders
            | Page::AdminFoodItems => "adminToast",
            Page::Landing | Page::UserLogin | Page::UserRegister | Page::UserDashboard => "userToast",
        }
    }

    /// Admin auth pages report through the inline form message only.
    pub fn floating_toast(&self) -> bool {
        !matches!(self, Page::AdminLogin | Page::AdminRegister)
    }

    pub fn placement(&self) -> ToastPlacement {
        if self.is_admin() {
            ToastPlacement::Admin
        } else {
            ToastPlacement::User
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Page::AdminLogin
                | Page::AdminRegister
                | Page::AdminDashboard
                | Page::AdminOrders
                | Page::AdminFoodItems
                | Page::AdminPay
        )
    }
}
