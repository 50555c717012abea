//! Order endpoints.

use serde_json::json;

use bookstall_core::types::{Order, OrderItem, OrderStatus, Page};

use super::{ApiClient, OrderApi};
use crate::error::ClientResult;

impl OrderApi for ApiClient {
    async fn create_order(&self, items: &[OrderItem]) -> ClientResult<Order> {
        self.post_json("/orders/", &json!({ "items": items })).await
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<Order> {
        self.patch_json(&format!("/orders/{id}/status/"), &json!({ "status": status }))
            .await
    }
}

impl ApiClient {
    /// `GET /orders/`: the caller's own orders (all orders for admins).
    pub async fn list_orders(&self, page: Option<u32>) -> ClientResult<Page<Order>> {
        let pairs: Vec<(&str, String)> = page
            .map(|p| vec![("page", p.to_string())])
            .unwrap_or_default();
        self.get_json_with_query("/orders/", &pairs).await
    }

    /// `GET /orders/:id/`
    pub async fn get_order(&self, id: i64) -> ClientResult<Order> {
        self.get_json(&format!("/orders/{id}/")).await
    }
}
