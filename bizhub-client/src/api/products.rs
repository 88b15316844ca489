//! Products gateway

use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::error::ClientResult;
use crate::http::HttpClient;

/// CRUD operations over /products
pub struct ProductsApi<'a> {
    pub(crate) client: &'a HttpClient,
}

impl ProductsApi<'_> {
    /// List all products visible to the current session
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        self.client.get("/products").await
    }

    /// Create a product
    pub async fn create(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.client.post("/products", payload).await
    }

    /// Update a product by id (partial payload)
    pub async fn update(&self, id: &str, payload: &ProductUpdate) -> ClientResult<Product> {
        self.client.put(&format!("/products/{id}"), payload).await
    }

    /// Delete a product by id
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/products/{id}")).await
    }
}
