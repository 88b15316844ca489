//! Orders gateway

use shared::models::{Order, OrderCreate, OrderUpdate};

use crate::error::ClientResult;
use crate::http::HttpClient;

/// CRUD operations over /orders
pub struct OrdersApi<'a> {
    pub(crate) client: &'a HttpClient,
}

impl OrdersApi<'_> {
    /// List all orders visible to the current session
    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        self.client.get("/orders").await
    }

    /// Create an order
    pub async fn create(&self, payload: &OrderCreate) -> ClientResult<Order> {
        self.client.post("/orders", payload).await
    }

    /// Update an order by id (status changes)
    pub async fn update(&self, id: &str, payload: &OrderUpdate) -> ClientResult<Order> {
        self.client.put(&format!("/orders/{id}"), payload).await
    }

    /// Delete an order by id
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/orders/{id}")).await
    }
}
