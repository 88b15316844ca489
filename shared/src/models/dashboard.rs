//! Dashboard Metrics Model

use serde::{Deserialize, Serialize};

use super::Order;

/// Aggregate metrics returned by GET /dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_products: u64,
    pub total_customers: u64,
    pub total_orders: u64,
    pub active_subscriptions: u64,
    pub photos_used: u64,
    /// -1 = unlimited
    pub photos_limit: i64,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}
