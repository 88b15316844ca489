//! Subscriptions gateway
//!
//! No delete: subscriptions are cancelled via update, never removed.

use shared::models::{Subscription, SubscriptionCreate, SubscriptionUpdate};

use crate::error::ClientResult;
use crate::http::HttpClient;

/// Operations over /subscriptions
pub struct SubscriptionsApi<'a> {
    pub(crate) client: &'a HttpClient,
}

impl SubscriptionsApi<'_> {
    /// List subscriptions for the current business
    pub async fn list(&self) -> ClientResult<Vec<Subscription>> {
        self.client.get("/subscriptions").await
    }

    /// Subscribe to a plan
    pub async fn create(&self, payload: &SubscriptionCreate) -> ClientResult<Subscription> {
        self.client.post("/subscriptions", payload).await
    }

    /// Update a subscription by id (status changes)
    pub async fn update(
        &self,
        id: &str,
        payload: &SubscriptionUpdate,
    ) -> ClientResult<Subscription> {
        self.client
            .put(&format!("/subscriptions/{id}"), payload)
            .await
    }
}
