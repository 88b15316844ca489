//! Plan Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Limit value meaning "no cap" on a plan quota
pub const UNLIMITED: i64 = -1;

/// Subscription plan entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Monthly price in dollars
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// -1 = unlimited
    pub photo_limit: i64,
    pub products_limit: i64,
    pub customers_limit: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Whether the photo quota is uncapped.
    pub fn photos_unlimited(&self) -> bool {
        self.photo_limit == UNLIMITED
    }
}
