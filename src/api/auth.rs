//! Login, OTP and registration endpoints.

use super::ApiClient;
use crate::error::Result;
use crate::models::{
    Ack, AdminRegistered, AdminRegistration, LoginReply, LoginRequest, OtpRequest,
    OtpVerifyRequest, Role, UserRegistration,
};

fn role_prefix(role: Role) -> &'static str {
    match role {
        Role::User => "/user",
        Role::Admin => "/admin",
    }
}

impl ApiClient {
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginReply> {
        let path = format!("{}/login", role_prefix(req.role));
        tracing::info!(role = ?req.role, "logging in");
        self.post_json(&path, req).await
    }

    pub async fn send_otp(&self, req: &OtpRequest) -> Result<Ack> {
        let path = format!("{}/send-otp", role_prefix(req.role));
        self.post_json(&path, req).await
    }

    pub async fn verify_otp(&self, req: &OtpVerifyRequest) -> Result<Ack> {
        let path = format!("{}/verify-otp", role_prefix(req.role));
        self.post_json(&path, req).await
    }

    pub async fn register_user(&self, req: &UserRegistration) -> Result<Ack> {
        self.post_json("/user/register", req).await
    }

    pub async fn register_admin(&self, req: &AdminRegistration) -> Result<AdminRegistered> {
        self.post_json("/admin/register", req).await
    }
}
