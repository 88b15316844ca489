//! Customers gateway

use shared::models::{Customer, CustomerCreate, CustomerUpdate};

use crate::error::ClientResult;
use crate::http::HttpClient;

/// CRUD operations over /customers
pub struct CustomersApi<'a> {
    pub(crate) client: &'a HttpClient,
}

impl CustomersApi<'_> {
    /// List all customers visible to the current session
    pub async fn list(&self) -> ClientResult<Vec<Customer>> {
        self.client.get("/customers").await
    }

    /// Create a customer
    pub async fn create(&self, payload: &CustomerCreate) -> ClientResult<Customer> {
        self.client.post("/customers", payload).await
    }

    /// Update a customer by id (partial payload)
    pub async fn update(&self, id: &str, payload: &CustomerUpdate) -> ClientResult<Customer> {
        self.client.put(&format!("/customers/{id}"), payload).await
    }

    /// Delete a customer by id
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/customers/{id}")).await
    }
}
