//! Photo Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Business, Product};
use crate::types::EntityRef;

/// Uploaded photo entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: String,
    pub business: EntityRef<Business>,
    #[serde(default)]
    pub product: Option<EntityRef<Product>>,
    pub filename: String,
    pub url: String,
    /// File size in bytes
    pub size: u64,
    pub mimetype: String,
    pub upload_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
