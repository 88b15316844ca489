//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Business, Customer, OrderStatus, PaymentStatus, Product};
use crate::types::EntityRef;

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub business: EntityRef<Business>,
    pub customer: EntityRef<Customer>,
    pub products: Vec<OrderItem>,
    /// Server-computed total in dollars
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product: EntityRef<Product>,
    pub quantity: u32,
    /// Unit price captured at order time
    pub price: f64,
}

/// Create order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_id: String,
    pub products: Vec<OrderItemCreate>,
    pub total: f64,
}

/// One line of a create-order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemCreate {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}
