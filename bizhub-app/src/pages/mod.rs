//! Per-page view state
//!
//! Each page owns its fetched collection plus form/search state, and
//! exposes the derived views as pure functions over that data. Mutations
//! go through the gateways and re-fetch the full collection afterwards;
//! there is no optimistic local merge.

pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod subscriptions;

pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use orders::{OrderForm, OrderFormError, OrdersPage};
pub use products::ProductsPage;
pub use subscriptions::SubscriptionsPage;

/// Case-insensitive substring match used by the listing pages. An empty
/// term matches everything, so filtering with it is the identity.
pub(crate) fn matches_search(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(&term.to_lowercase())
}
