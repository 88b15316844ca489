//! Resource gateways
//!
//! One fixed set of operations per entity type, each a direct
//! pass-through to the shared client with a fixed path and verb. No
//! gateway validates payloads; the remote API is the source of truth.

mod auth;
mod customers;
mod dashboard;
mod orders;
mod plans;
mod products;
mod subscriptions;

pub use auth::AuthApi;
pub use customers::CustomersApi;
pub use dashboard::DashboardApi;
pub use orders::OrdersApi;
pub use plans::PlansApi;
pub use products::ProductsApi;
pub use subscriptions::SubscriptionsApi;

use crate::http::HttpClient;

impl HttpClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn plans(&self) -> PlansApi<'_> {
        PlansApi { client: self }
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi { client: self }
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { client: self }
    }

    pub fn customers(&self) -> CustomersApi<'_> {
        CustomersApi { client: self }
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi { client: self }
    }

    pub fn subscriptions(&self) -> SubscriptionsApi<'_> {
        SubscriptionsApi { client: self }
    }
}
