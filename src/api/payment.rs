//! Payment order and verification endpoints.

use super::{decode_envelope, read_status, ApiClient};
use crate::error::{ApiError, Result};
use crate::models::{CreatePaymentOrder, PaymentOrder, VerifyPayment};

impl ApiClient {
    pub async fn create_payment_order(&self, req: &CreatePaymentOrder) -> Result<PaymentOrder> {
        self.post_json_status("/payment/create-order", req).await
    }

    /// Needs both a 2xx status and `success: true`.
    pub async fn create_subscription_order(&self) -> Result<PaymentOrder> {
        let path = "/payment/admin/create-subscription-order";
        let resp = self.post(path).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(path, status = status.as_u16(), "subscription order reply");
        let order: PaymentOrder = decode_envelope(&text)?;
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(order)
    }

    /// Only the status matters; the body is ignored.
    pub async fn verify_payment(&self, req: &VerifyPayment) -> Result<()> {
        let path = "/payment/verify";
        tracing::info!(app_order_id = %req.app_order_id, "verifying payment");
        let resp = self.post(path).json(req).send().await?;
        read_status(path, resp).await.map(|_| ())
    }
}
