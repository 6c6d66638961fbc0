//! Cart and order placement endpoints.

use super::ApiClient;
use crate::error::Result;
use crate::models::{Ack, CartAdded, CheckoutRequest, OrderCreated};

impl ApiClient {
    pub async fn add_to_cart(&self, item_id: u64, quantity: u32) -> Result<CartAdded> {
        tracing::info!(item_id, quantity, "adding to cart");
        let params = [("itemId", item_id.to_string()), ("quantity", quantity.to_string())];
        self.post_form("/user/cart/add", &params).await
    }

    pub async fn update_cart(&self, cart_item_id: u64, quantity: u32) -> Result<Ack> {
        let params = [
            ("cartItemId", cart_item_id.to_string()),
            ("quantity", quantity.to_string()),
        ];
        self.post_query("/user/cart/update", &params).await
    }

    pub async fn remove_from_cart(&self, cart_item_id: u64) -> Result<Ack> {
        let params = [("cartItemId", cart_item_id.to_string())];
        self.post_query("/user/cart/remove", &params).await
    }

    pub async fn create_order_from_cart(&self, req: &CheckoutRequest) -> Result<OrderCreated> {
        let order: OrderCreated = self.post_json("/user/orders/create-from-cart", req).await?;
        tracing::info!(order_id = %order.order_id, amount = order.amount, "order created");
        Ok(order)
    }
}
