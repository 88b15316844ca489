//! Dashboard gateway

use shared::models::DashboardMetrics;

use crate::error::ClientResult;
use crate::http::HttpClient;

/// Read-only operations over /dashboard
pub struct DashboardApi<'a> {
    pub(crate) client: &'a HttpClient,
}

impl DashboardApi<'_> {
    /// Fetch the aggregate metrics for the current business
    pub async fn metrics(&self) -> ClientResult<DashboardMetrics> {
        self.client.get("/dashboard").await
    }
}
