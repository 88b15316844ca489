//! Plans gateway

use shared::models::Plan;

use crate::error::ClientResult;
use crate::http::HttpClient;

/// Read-only operations over /plans
pub struct PlansApi<'a> {
    pub(crate) client: &'a HttpClient,
}

impl PlansApi<'_> {
    /// List available plans
    pub async fn list(&self) -> ClientResult<Vec<Plan>> {
        self.client.get("/plans").await
    }
}
