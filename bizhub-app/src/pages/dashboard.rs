//! Dashboard page state

use bizhub_client::{ClientResult, HttpClient};
use shared::models::{DashboardMetrics, Order, UNLIMITED};

/// View state for the metrics dashboard.
#[derive(Debug, Default)]
pub struct DashboardPage {
    metrics: Option<DashboardMetrics>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) -> ClientResult<()> {
        self.metrics = Some(client.dashboard().metrics().await?);
        Ok(())
    }

    pub fn metrics(&self) -> Option<&DashboardMetrics> {
        self.metrics.as_ref()
    }

    /// Photo quota usage in percent. `None` means the plan is unlimited
    /// and no gauge should render.
    pub fn photo_usage_percent(&self) -> Option<f64> {
        let metrics = self.metrics.as_ref()?;
        if metrics.photos_limit == UNLIMITED {
            return None;
        }
        if metrics.photos_limit == 0 {
            return Some(0.0);
        }
        Some(metrics.photos_used as f64 / metrics.photos_limit as f64 * 100.0)
    }

    pub fn recent_orders(&self) -> &[Order] {
        self.metrics
            .as_ref()
            .map(|metrics| metrics.recent_orders.as_slice())
            .unwrap_or(&[])
    }
}
