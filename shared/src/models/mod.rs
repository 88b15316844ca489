//! Entity models
//!
//! Passive mirrors of server-side documents. The server owns every
//! lifecycle; the client only reflects what it fetched.

mod business;
mod customer;
mod dashboard;
mod order;
mod photo;
mod plan;
mod product;
mod status;
mod subscription;

pub use business::Business;
pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use dashboard::DashboardMetrics;
pub use order::{Order, OrderCreate, OrderItem, OrderItemCreate, OrderUpdate};
pub use photo::Photo;
pub use plan::{Plan, UNLIMITED};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use status::{OrderStatus, PaymentStatus, ProductStatus, SubscriptionStatus};
pub use subscription::{Subscription, SubscriptionCreate, SubscriptionUpdate};
