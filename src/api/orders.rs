//! Admin order board endpoints.

use super::ApiClient;
use crate::error::Result;
use crate::models::{Ack, OrderStatus};

impl ApiClient {
    pub async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> Result<Ack> {
        tracing::info!(order_id, status = status.as_str(), "updating order status");
        let params = [("orderId", order_id), ("status", status.as_str())];
        self.post_query("/admin/orders/update-status", &params).await
    }

    pub async fn set_estimated_time(&self, order_id: &str, minutes: u32) -> Result<Ack> {
        let params = [
            ("orderId", order_id.to_string()),
            ("estimatedTimeMinutes", minutes.to_string()),
        ];
        self.post_query("/admin/orders/set-time", &params).await
    }
}
